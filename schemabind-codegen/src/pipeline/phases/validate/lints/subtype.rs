//! Lint for `subtype_of` relationships.

use schemabind_ir::ApiDescription;
use schemabind_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors when a type claims to implement something that is not a
/// declared zero-field type.
pub struct SubtypeLint;

impl Lint for SubtypeLint {
    fn name(&self) -> &'static str {
        "subtype"
    }

    fn description(&self) -> &'static str {
        "Require subtype_of to name declared zero-field types"
    }

    fn check(&self, api: &ApiDescription, _: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for ty in api.types.values() {
            for parent in &ty.subtype_of {
                let message = match api.type_named(parent) {
                    None => format!("`{}` implements undeclared type `{}`", ty.name, parent),
                    Some(p) if !p.is_marker() => format!(
                        "`{}` implements `{}`, which has fields",
                        ty.name, parent
                    ),
                    Some(_) if ty.is_marker() => format!(
                        "`{}` implements `{}` but has no fields of its own",
                        ty.name, parent
                    ),
                    Some(_) => continue,
                };
                diagnostics.push(
                    Diagnostic::error("validate", message).at(format!("types.{}", ty.name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{parse_api, sample_api};

    #[test]
    fn test_sample_passes() {
        let mut diagnostics = Vec::new();
        SubtypeLint.check(&sample_api(), &Manifest::default(), &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_invalid_parents() {
        let api = parse_api(
            r#"{"types": {
                "User": {"name": "User", "fields": [{"name": "id", "types": ["Integer"], "required": true}]},
                "Bot": {"name": "Bot", "subtype_of": ["User"], "fields": [{"name": "id", "types": ["Integer"], "required": true}]},
                "Ghost": {"name": "Ghost", "subtype_of": ["Missing"], "fields": [{"name": "id", "types": ["Integer"], "required": true}]}
            }}"#,
        );
        let mut diagnostics = Vec::new();
        SubtypeLint.check(&api, &Manifest::default(), &mut diagnostics);

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].message.contains("which has fields"));
        assert!(diagnostics[1].message.contains("undeclared type `Missing`"));
    }
}
