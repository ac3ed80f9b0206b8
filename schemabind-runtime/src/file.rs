//! File references and attachment tokens.

use std::{fmt, path::Path};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

use crate::{Error, Params, Parts};

const ATTACH_SCHEME: &str = "attach://";

/// Named binary content uploaded alongside a request.
#[derive(Clone, PartialEq, Eq)]
pub struct NamedFile {
    pub file_name: String,
    pub data: Vec<u8>,
}

impl NamedFile {
    pub fn new(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            data: data.into(),
        }
    }

    /// Read a file from disk, naming the part after the file name.
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { file_name, data })
    }
}

impl fmt::Debug for NamedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedFile")
            .field("file_name", &self.file_name)
            .field("len", &self.data.len())
            .finish()
    }
}

/// A file reference: something already on the server, something the server
/// can fetch, or content uploaded with the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFile {
    /// Identifier of a file already stored on the server (or an attachment token).
    Id(String),
    /// URL the server fetches the file from.
    Url(String),
    /// Content uploaded as a side-channel part.
    Upload(NamedFile),
}

impl InputFile {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    pub fn upload(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self::Upload(NamedFile::new(file_name, data))
    }

    /// The string written on the wire, if this reference is a string.
    pub fn wire_value(&self) -> Option<&str> {
        match self {
            Self::Id(s) | Self::Url(s) => Some(s),
            Self::Upload(_) => None,
        }
    }

    /// Register an upload under `name` and return the reference to use in its place.
    ///
    /// String references are returned unchanged and register nothing.
    pub fn attach(&self, name: &str, parts: &mut Parts) -> InputFile {
        match self {
            Self::Upload(file) => {
                parts.insert(name, file.clone());
                Self::Id(format!("{ATTACH_SCHEME}{name}"))
            }
            other => other.clone(),
        }
    }
}

impl Default for InputFile {
    fn default() -> Self {
        Self::Id(String::new())
    }
}

impl From<&str> for InputFile {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<String> for InputFile {
    fn from(value: String) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Url(value)
        } else {
            Self::Id(value)
        }
    }
}

impl From<NamedFile> for InputFile {
    fn from(value: NamedFile) -> Self {
        Self::Upload(value)
    }
}

impl Serialize for InputFile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.wire_value() {
            Some(value) => serializer.serialize_str(value),
            None => Err(ser::Error::custom(
                "uploaded files must be attached as request parts before encoding",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for InputFile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)
            .map_err(|e| de::Error::custom(format!("file reference must be a string: {e}")))?;
        Ok(Self::from(value))
    }
}

/// Which file reference kinds a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachPolicy {
    /// Identifiers, URLs and uploads.
    Any,
    /// Only uploaded content.
    UploadOnly,
}

/// Write a file reference for `field` into the request.
///
/// String references are written verbatim. Uploads are registered in `parts`
/// under the field name and `attach://<field>` is written instead.
pub fn attach_file(
    field: &str,
    file: &InputFile,
    policy: AttachPolicy,
    params: &mut Params,
    parts: &mut Parts,
) -> Result<(), Error> {
    match (file, policy) {
        (InputFile::Upload(upload), _) => {
            parts.insert(field, upload.clone());
            params.insert(field, format!("{ATTACH_SCHEME}{field}"));
            Ok(())
        }
        (InputFile::Id(value) | InputFile::Url(value), AttachPolicy::Any) => {
            params.insert(field, value.as_str());
            Ok(())
        }
        (InputFile::Id(_) | InputFile::Url(_), AttachPolicy::UploadOnly) => Err(Error::FileKind {
            field: field.to_string(),
            reason: "only uploaded content is accepted".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_is_written_verbatim() {
        let mut params = Params::new();
        let mut parts = Parts::new();

        attach_file(
            "photo",
            &InputFile::id("AgADBAAD"),
            AttachPolicy::Any,
            &mut params,
            &mut parts,
        )
        .unwrap();

        assert_eq!(params.get("photo"), Some("AgADBAAD"));
        assert!(parts.is_empty());
    }

    #[test]
    fn test_upload_registers_one_part() {
        let mut params = Params::new();
        let mut parts = Parts::new();

        attach_file(
            "photo",
            &InputFile::upload("cat.jpg", b"jpeg".to_vec()),
            AttachPolicy::Any,
            &mut params,
            &mut parts,
        )
        .unwrap();

        assert_eq!(params.get("photo"), Some("attach://photo"));
        assert_eq!(parts.len(), 1);
        assert_eq!(parts.get("photo").unwrap().data, b"jpeg");
    }

    #[test]
    fn test_upload_only_rejects_strings() {
        let mut params = Params::new();
        let mut parts = Parts::new();

        let err = attach_file(
            "certificate",
            &InputFile::url("https://example.com/cert.pem"),
            AttachPolicy::UploadOnly,
            &mut params,
            &mut parts,
        )
        .unwrap_err();

        assert!(matches!(err, Error::FileKind { ref field, .. } if field == "certificate"));
        assert!(params.is_empty());
    }

    #[test]
    fn test_attach_replaces_upload_with_token() {
        let mut parts = Parts::new();
        let file = InputFile::upload("a.png", vec![0u8]);

        let attached = file.attach("media0", &mut parts);

        assert_eq!(attached, InputFile::id("attach://media0"));
        assert!(parts.get("media0").is_some());
        assert_eq!(InputFile::url("https://x").attach("media1", &mut parts), InputFile::url("https://x"));
        assert_eq!(parts.len(), 1);
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&InputFile::id("abc")).unwrap(), "\"abc\"");
        assert!(serde_json::to_string(&InputFile::upload("a", vec![])).is_err());

        let parsed: InputFile = serde_json::from_str("\"https://example.com/a.png\"").unwrap();
        assert_eq!(parsed, InputFile::url("https://example.com/a.png"));
    }

    #[test]
    fn test_named_file_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sticker.webp");
        std::fs::write(&path, b"RIFF").unwrap();

        let file = NamedFile::from_path(&path).unwrap();
        assert_eq!(file.file_name, "sticker.webp");
        assert_eq!(file.data, b"RIFF");
        assert!(NamedFile::from_path(dir.path().join("missing")).is_err());
    }
}
