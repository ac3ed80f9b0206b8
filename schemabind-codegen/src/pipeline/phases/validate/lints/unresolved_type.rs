//! Lint for references to types the description does not declare.

use schemabind_ir::{ApiDescription, WireType};
use schemabind_manifest::Manifest;

use super::{super::Lint, all_fields};
use crate::pipeline::Diagnostic;

/// Lint that errors on dangling type references in fields and returns.
pub struct UnresolvedTypeLint;

impl Lint for UnresolvedTypeLint {
    fn name(&self) -> &'static str {
        "unresolved-type"
    }

    fn description(&self) -> &'static str {
        "Require every referenced type to be declared"
    }

    fn check(&self, api: &ApiDescription, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let resolves =
            |name: &str| name == manifest.families.file || api.type_named(name).is_some();

        let returns = api.methods.values().map(|method| {
            (
                format!("methods.{}", method.name),
                method.returns.as_slice(),
            )
        });
        let fields = all_fields(api).map(|(location, field)| (location, field.types.as_slice()));

        for (location, descriptors) in fields.chain(returns) {
            for wire in descriptors.iter().filter_map(|d| WireType::parse(d)) {
                for name in wire.references() {
                    if !resolves(name) {
                        diagnostics.push(
                            Diagnostic::error("validate", format!("unresolved type `{}`", name))
                                .at(location.clone()),
                        );
                    }
                }
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
        UnresolvedTypeLint.check(&sample_api(), &Manifest::default(), &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_dangling_references() {
        let api = parse_api(
            r#"{
                "types": {"Poll": {"name": "Poll", "description": ["A poll."], "fields": [
                    {"name": "options", "types": ["Array of PollOption"], "required": true}
                ]}},
                "methods": {"stopPoll": {"name": "stopPoll", "returns": ["Poll"], "fields": [
                    {"name": "reply_markup", "types": ["InlineKeyboardMarkup"], "required": false}
                ]}}
            }"#,
        );
        let mut diagnostics = Vec::new();
        UnresolvedTypeLint.check(&api, &Manifest::default(), &mut diagnostics);

        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            [
                "unresolved type `PollOption`",
                "unresolved type `InlineKeyboardMarkup`"
            ]
        );
    }

    #[test]
    fn test_file_type_always_resolves() {
        let api = parse_api(
            r#"{"methods": {"sendDocument": {"name": "sendDocument", "returns": ["True"], "fields": [
                {"name": "document", "types": ["InputFile", "String"], "required": true}
            ]}}}"#,
        );
        let mut diagnostics = Vec::new();
        UnresolvedTypeLint.check(&api, &Manifest::default(), &mut diagnostics);
        assert!(diagnostics.is_empty());
    }
}
