//! Manifest types and parsing for schemabind.toml files.
//!
//! Every table and key is optional. The override lists default to the two
//! overrides the Bot API needs; a list given in the file replaces its default.

mod file;
mod parse;

use std::path::PathBuf;

pub use file::SchemabindToml;
pub use parse::parse_manifest;
use serde::Deserialize;

/// Root manifest for schemabind.toml
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub client: ClientConfig,
    pub families: FamilyConfig,
    pub overrides: OverrideConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Path of the API description, relative to the manifest.
    pub schema: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory receiving the generated module, relative to the manifest.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Name of the generated client struct.
    pub name: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            name: "Bot".to_string(),
        }
    }
}

/// Schema type names that receive special treatment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FamilyConfig {
    /// Polymorphic family whose members carry uploadable media.
    pub media: String,
    /// The file reference type, provided by the runtime.
    pub file: String,
}

impl Default for FamilyConfig {
    fn default() -> Self {
        Self {
            media: "InputMedia".to_string(),
            file: "InputFile".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverrideConfig {
    pub nullable: Vec<NullableOverride>,
    pub conditional_zero: Vec<ConditionalZeroOverride>,
}

impl Default for OverrideConfig {
    fn default() -> Self {
        Self {
            nullable: vec![NullableOverride {
                method: "editForumTopic".to_string(),
                field: "icon_custom_emoji_id".to_string(),
            }],
            conditional_zero: vec![ConditionalZeroOverride {
                method: "sendPoll".to_string(),
                field: "correct_option_id".to_string(),
                sibling: "type".to_string(),
                equals: "quiz".to_string(),
            }],
        }
    }
}

/// An optional primitive parameter whose empty value is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NullableOverride {
    pub method: String,
    pub field: String,
}

/// An optional parameter sent even when zero while `sibling` equals `equals`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConditionalZeroOverride {
    pub method: String,
    pub field: String,
    pub sibling: String,
    pub equals: String,
}
