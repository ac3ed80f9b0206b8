//! Lint for duplicate field names.

use std::collections::HashSet;

use schemabind_ir::{ApiDescription, FieldDescriptor};
use schemabind_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on a type or method declaring the same field twice.
pub struct DuplicateFieldLint;

impl Lint for DuplicateFieldLint {
    fn name(&self) -> &'static str {
        "duplicate-field"
    }

    fn description(&self) -> &'static str {
        "Detect fields declared twice on one type or method"
    }

    fn check(&self, api: &ApiDescription, _: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let owners = api
            .types
            .values()
            .map(|ty| (format!("types.{}", ty.name), &ty.fields))
            .chain(
                api.methods
                    .values()
                    .map(|m| (format!("methods.{}", m.name), &m.fields)),
            );

        for (location, fields) in owners {
            check_fields(&location, fields, diagnostics);
        }
    }
}

fn check_fields(location: &str, fields: &[FieldDescriptor], diagnostics: &mut Vec<Diagnostic>) {
    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(field.name.as_str()) {
            diagnostics.push(
                Diagnostic::error("validate", format!("duplicate field `{}`", field.name))
                    .at(location),
            );
        }
    }
}
