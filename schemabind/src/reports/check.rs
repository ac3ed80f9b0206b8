//! Check command report data structures.

use std::path::PathBuf;

use super::{
    ApiSummary,
    output::{Output, Report},
};

/// Report data from API description validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the API description.
    pub schema_path: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    /// What generation would emit; `None` when validation failed.
    pub summary: Option<ApiSummary>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.schema_path.display()));
        if let Some(summary) = &self.summary {
            out.newline();
            summary.render(out);
        }
    }
}
