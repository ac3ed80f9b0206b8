use std::path::{Path, PathBuf};

use super::Manifest;
use crate::{Error, Result};

/// A schemabind.toml file: its location and parsed manifest.
///
/// Relative paths in the manifest are resolved against the directory
/// containing the file.
#[derive(Debug, Clone)]
pub struct SchemabindToml {
    path: PathBuf,
    manifest: Manifest,
}

impl SchemabindToml {
    /// Open and parse a schemabind.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let manifest = super::parse_manifest(&content, &path.display().to_string())?;
        Ok(Self { path, manifest })
    }

    /// Open `path` if it exists, otherwise fall back to the default manifest
    /// rooted at the current directory.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            tracing::debug!(path = %path.display(), "no manifest found, using defaults");
            Ok(Self {
                path: path.to_path_buf(),
                manifest: Manifest::default(),
            })
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory the manifest's relative paths are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// The configured API description path, resolved.
    pub fn schema_path(&self) -> Option<PathBuf> {
        self.manifest
            .input
            .schema
            .as_ref()
            .map(|p| self.base_dir().join(p))
    }

    /// The configured output directory, resolved.
    pub fn output_dir(&self) -> Option<PathBuf> {
        self.manifest
            .output
            .dir
            .as_ref()
            .map(|p| self.base_dir().join(p))
    }
}
