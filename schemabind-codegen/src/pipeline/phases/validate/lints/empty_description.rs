//! Lint for undocumented types and methods.

use schemabind_ir::ApiDescription;
use schemabind_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about types and methods without a description.
pub struct EmptyDescriptionLint;

impl Lint for EmptyDescriptionLint {
    fn name(&self) -> &'static str {
        "empty-description"
    }

    fn description(&self) -> &'static str {
        "Warn about types and methods without a description"
    }

    fn check(&self, api: &ApiDescription, _: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let blank = |paragraphs: &[String]| paragraphs.iter().all(|p| p.trim().is_empty());

        for ty in api.types.values().filter(|ty| blank(&ty.description)) {
            diagnostics.push(
                Diagnostic::warning("validate", format!("type `{}` has no description", ty.name))
                    .at(format!("types.{}", ty.name)),
            );
        }
        for method in api.methods.values().filter(|m| blank(&m.description)) {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!("method `{}` has no description", method.name),
                )
                .at(format!("methods.{}", method.name)),
            );
        }
    }
}
