use std::path::{Path, PathBuf};

use schemabind_core::GeneratedFile;

use super::GENERATED_HEADER;
use crate::{RawCode, RustFile};

/// `mod.rs` re-exporting the types and the client.
pub struct ModRs;

impl GeneratedFile for ModRs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("mod.rs")
    }

    fn render(&self) -> String {
        RustFile::new()
            .add(RawCode::lines(["mod methods;", "mod types;"]))
            .add(RawCode::lines(["pub use methods::*;", "pub use types::*;"]))
            .render_with_header(GENERATED_HEADER)
    }
}
