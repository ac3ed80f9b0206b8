//! Typed serde attributes for semantic code generation.
//!
//! Instead of passing raw strings like `"serde(rename = \"type\")"`, use typed
//! attributes that are rendered to the appropriate syntax.

use std::fmt;

/// Path of the runtime zero check used by `skip_serializing_if`.
pub const IS_ZERO: &str = "schemabind_runtime::is_zero";

/// Options for a `#[serde(...)]` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SerdeAttr {
    /// `rename = "..."` - wire name differs from the member name.
    pub rename: Option<String>,
    /// `default` - missing on the wire decodes to the zero value.
    pub default: bool,
    /// `skip_serializing_if = "schemabind_runtime::is_zero"`.
    pub skip_zero: bool,
    /// `untagged` - enum serializes as its variant's content.
    pub untagged: bool,
}

impl SerdeAttr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rename(mut self, wire: impl Into<String>) -> Self {
        self.rename = Some(wire.into());
        self
    }

    pub fn defaulted(mut self) -> Self {
        self.default = true;
        self
    }

    pub fn skip_zero(mut self) -> Self {
        self.skip_zero = true;
        self
    }

    pub fn untagged(mut self) -> Self {
        self.untagged = true;
        self
    }

    /// Rename only when the member name differs from the wire name.
    pub fn rename_if(self, member: &str, wire: &str) -> Self {
        if member.trim_start_matches("r#") == wire {
            self
        } else {
            self.rename(wire)
        }
    }

    /// Whether rendering would produce an empty `serde()`.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl fmt::Display for SerdeAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if let Some(ref wire) = self.rename {
            parts.push(format!("rename = \"{}\"", wire));
        }
        if self.default {
            parts.push("default".to_string());
        }
        if self.skip_zero {
            parts.push(format!("skip_serializing_if = \"{}\"", IS_ZERO));
        }
        if self.untagged {
            parts.push("untagged".to_string());
        }

        write!(f, "serde({})", parts.join(", "))
    }
}
