//! Lint for encoding overrides that do not match the API description.

use schemabind_ir::{ApiDescription, WireType};
use schemabind_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when an override names a missing method or parameter, or
/// a parameter it cannot apply to. Such overrides are ignored.
pub struct OverrideTargetLint;

impl Lint for OverrideTargetLint {
    fn name(&self) -> &'static str {
        "override-target"
    }

    fn description(&self) -> &'static str {
        "Warn about overrides that match no optional scalar parameter"
    }

    fn check(&self, api: &ApiDescription, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let overrides = &manifest.overrides;
        let targets = overrides
            .nullable
            .iter()
            .map(|o| ("overrides.nullable", o.method.as_str(), o.field.as_str()))
            .chain(overrides.conditional_zero.iter().map(|o| {
                (
                    "overrides.conditional_zero",
                    o.method.as_str(),
                    o.field.as_str(),
                )
            }));

        for (location, method_name, field_name) in targets {
            let warning = |message: String| Diagnostic::warning("validate", message).at(location);

            let Some(method) = api.method_named(method_name) else {
                diagnostics.push(warning(format!(
                    "override targets unknown method `{}`",
                    method_name
                )));
                continue;
            };
            let Some(field) = method.field(field_name) else {
                diagnostics.push(warning(format!(
                    "override targets unknown parameter `{}.{}`",
                    method_name, field_name
                )));
                continue;
            };
            let scalar = field
                .preferred_type()
                .is_some_and(|wire: WireType| wire.is_primitive());
            if field.required || !scalar {
                diagnostics.push(warning(format!(
                    "override target `{}.{}` is not an optional scalar",
                    method_name, field_name
                )));
            }
        }

        for o in &overrides.conditional_zero {
            let has_sibling = api
                .method_named(&o.method)
                .is_some_and(|m| m.field(&o.sibling).is_some());
            if api.method_named(&o.method).is_some() && !has_sibling {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "override sibling `{}.{}` does not exist",
                            o.method, o.sibling
                        ),
                    )
                    .at("overrides.conditional_zero"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use schemabind_manifest::{ConditionalZeroOverride, NullableOverride};

    use super::*;
    use crate::testing::sample_api;

    #[test]
    fn test_defaults_match_sample() {
        let mut diagnostics = Vec::new();
        OverrideTargetLint.check(&sample_api(), &Manifest::default(), &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_mismatched_targets() {
        let mut manifest = Manifest::default();
        manifest.overrides.nullable = vec![
            NullableOverride {
                method: "deleteForumTopic".into(),
                field: "icon_custom_emoji_id".into(),
            },
            NullableOverride {
                method: "sendMessage".into(),
                field: "text".into(),
            },
        ];
        manifest.overrides.conditional_zero = vec![ConditionalZeroOverride {
            method: "sendPoll".into(),
            field: "correct_option_id".into(),
            sibling: "poll_type".into(),
            equals: "quiz".into(),
        }];

        let mut diagnostics = Vec::new();
        OverrideTargetLint.check(&sample_api(), &manifest, &mut diagnostics);

        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            [
                "override targets unknown method `deleteForumTopic`",
                "override target `sendMessage.text` is not an optional scalar",
                "override sibling `sendPoll.poll_type` does not exist",
            ]
        );
    }
}
