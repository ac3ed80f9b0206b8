use std::path::{Path, PathBuf};

use schemabind_core::GeneratedFile;

use super::GENERATED_HEADER;
use crate::RustFile;

/// `types.rs`: every record, placeholder and family of the API.
pub struct TypesRs {
    body: RustFile,
}

impl TypesRs {
    pub fn new(body: RustFile) -> Self {
        Self { body }
    }
}

impl GeneratedFile for TypesRs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("types.rs")
    }

    fn render(&self) -> String {
        self.body.render_with_header(GENERATED_HEADER)
    }
}
