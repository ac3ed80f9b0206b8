//! Per-parameter encoding overrides.

use schemabind_manifest::OverrideConfig;

/// An optional scalar that must be sent even when zero, if a sibling
/// parameter holds a given value (e.g. `correct_option_id` of a quiz poll).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalZero {
    pub method: String,
    pub field: String,
    pub sibling: String,
    pub equals: String,
}

/// Encoding exceptions keyed by (method name, field name).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodingOverrides {
    nullable: Vec<(String, String)>,
    conditional_zero: Vec<ConditionalZero>,
}

impl EncodingOverrides {
    pub fn from_config(config: &OverrideConfig) -> Self {
        Self {
            nullable: config
                .nullable
                .iter()
                .map(|o| (o.method.clone(), o.field.clone()))
                .collect(),
            conditional_zero: config
                .conditional_zero
                .iter()
                .map(|o| ConditionalZero {
                    method: o.method.clone(),
                    field: o.field.clone(),
                    sibling: o.sibling.clone(),
                    equals: o.equals.clone(),
                })
                .collect(),
        }
    }

    /// No overrides at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Sentinel fields: nullable even though their type is a primitive.
    pub fn is_nullable(&self, method: &str, field: &str) -> bool {
        self.nullable
            .iter()
            .any(|(m, f)| m == method && f == field)
    }

    pub fn conditional_zero(&self, method: &str, field: &str) -> Option<&ConditionalZero> {
        self.conditional_zero
            .iter()
            .find(|o| o.method == method && o.field == field)
    }

    /// Every (method, field) pair named by any override.
    pub fn targets(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nullable
            .iter()
            .map(|(m, f)| (m.as_str(), f.as_str()))
            .chain(
                self.conditional_zero
                    .iter()
                    .map(|o| (o.method.as_str(), o.field.as_str())),
            )
    }
}
