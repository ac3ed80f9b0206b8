//! Lint for unusable field type descriptors.

use schemabind_ir::{ApiDescription, WireType};
use schemabind_manifest::Manifest;

use super::{super::Lint, all_fields};
use crate::pipeline::Diagnostic;

/// Lint that errors on fields with no candidate types or with a candidate
/// that is not a valid descriptor.
pub struct FieldTypeLint;

impl Lint for FieldTypeLint {
    fn name(&self) -> &'static str {
        "field-type"
    }

    fn description(&self) -> &'static str {
        "Require at least one parseable type descriptor per field"
    }

    fn check(&self, api: &ApiDescription, _: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for (location, field) in all_fields(api) {
            if field.types.is_empty() {
                diagnostics.push(
                    Diagnostic::error("validate", format!("field `{}` has no types", field.name))
                        .at(location.clone()),
                );
            }
            for candidate in &field.types {
                if WireType::parse(candidate).is_none() {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!(
                                "field `{}` has malformed type `{}`",
                                field.name, candidate
                            ),
                        )
                        .at(location.clone()),
                    );
                }
            }
        }
    }
}
