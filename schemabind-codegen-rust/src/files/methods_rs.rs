use std::path::{Path, PathBuf};

use schemabind_core::GeneratedFile;

use super::GENERATED_HEADER;
use crate::RustFile;

/// `methods.rs`: the client, its operations and their options structs.
pub struct MethodsRs {
    body: RustFile,
}

impl MethodsRs {
    pub fn new(body: RustFile) -> Self {
        Self { body }
    }
}

impl GeneratedFile for MethodsRs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("methods.rs")
    }

    fn render(&self) -> String {
        self.body.render_with_header(GENERATED_HEADER)
    }
}
