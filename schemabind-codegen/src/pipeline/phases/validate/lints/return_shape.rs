//! Lint for method return lists.

use schemabind_ir::ApiDescription;
use schemabind_manifest::Manifest;

use super::super::Lint;
use crate::{pipeline::Diagnostic, schema::ReturnShape};

/// Lint that errors unless a method returns one type, or one type and a
/// boolean.
pub struct ReturnShapeLint;

impl Lint for ReturnShapeLint {
    fn name(&self) -> &'static str {
        "return-shape"
    }

    fn description(&self) -> &'static str {
        "Require a single return type or a type-or-boolean pair"
    }

    fn check(&self, api: &ApiDescription, _: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for method in api.methods.values() {
            if let Err(e) = ReturnShape::from_method(method) {
                diagnostics.push(
                    Diagnostic::error("validate", e.to_string())
                        .at(format!("methods.{}", method.name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::parse_api;

    #[test]
    fn test_bad_return_lists() {
        let api = parse_api(
            r#"{"methods": {
                "getMe": {"name": "getMe", "returns": ["User"]},
                "close": {"name": "close", "returns": []},
                "editMessageCaption": {"name": "editMessageCaption", "returns": ["Message", "String"]}
            }}"#,
        );
        let mut diagnostics = Vec::new();
        ReturnShapeLint.check(&api, &Manifest::default(), &mut diagnostics);

        let locations: Vec<_> = diagnostics
            .iter()
            .filter_map(|d| d.location.as_deref())
            .collect();
        assert_eq!(locations, ["methods.close", "methods.editMessageCaption"]);
    }
}
