//! Lint trait for schema validation.

use schemabind_ir::ApiDescription;
use schemabind_manifest::Manifest;

use crate::pipeline::Diagnostic;

/// A lint that checks the API description (and its configuration) for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the API description and add any diagnostics.
    fn check(&self, api: &ApiDescription, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>);
}
