//! JSON encoding of composite and media fields.

use serde::Serialize;
use serde_json::Value;

use crate::{Error, Parts};

/// A media value that registers its own uploads before serializing.
pub trait MediaParams {
    /// Serialize as a JSON fragment, registering uploaded members in `parts`
    /// under `name` (and `<name>_<field>` for secondary file members).
    fn media_params(&self, name: &str, parts: &mut Parts) -> Result<Value, serde_json::Error>;
}

impl<T: MediaParams + ?Sized> MediaParams for Box<T> {
    fn media_params(&self, name: &str, parts: &mut Parts) -> Result<Value, serde_json::Error> {
        (**self).media_params(name, parts)
    }
}

/// Serialize a composite field as JSON.
pub fn encode_json<T: Serialize + ?Sized>(field: &str, value: &T) -> Result<String, Error> {
    serde_json::to_string(value).map_err(|source| Error::encode(field, source))
}

/// Serialize a single media field, registering its uploads under the field name.
pub fn encode_media<M: MediaParams + ?Sized>(
    field: &str,
    media: &M,
    parts: &mut Parts,
) -> Result<String, Error> {
    let fragment = media
        .media_params(field, parts)
        .map_err(|source| Error::encode(field, source))?;
    Ok(fragment.to_string())
}

/// Serialize a sequence of media; element `i` registers its uploads under `<field><i>`.
pub fn encode_media_group<M: MediaParams>(
    field: &str,
    items: &[M],
    parts: &mut Parts,
) -> Result<String, Error> {
    let mut fragments = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let fragment = item
            .media_params(&format!("{field}{idx}"), parts)
            .map_err(|source| Error::encode(field, source))?;
        fragments.push(fragment);
    }
    Ok(Value::Array(fragments).to_string())
}
