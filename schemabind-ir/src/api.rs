//! API description model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::WireType;

/// Root of the schema: every type and method of the API, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiDescription {
    /// Upstream API version label (e.g. "Bot API 7.0").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Named types keyed by type name.
    #[serde(default)]
    pub types: IndexMap<String, TypeDescriptor>,
    /// Named operations keyed by method name.
    #[serde(default)]
    pub methods: IndexMap<String, MethodDescriptor>,
}

impl ApiDescription {
    /// Look up a type by name.
    pub fn type_named(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    /// Look up a method by name.
    pub fn method_named(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.get(name)
    }

    /// Returns true if `name` is a zero-field type (a polymorphic marker).
    pub fn is_marker(&self, name: &str) -> bool {
        self.type_named(name).is_some_and(TypeDescriptor::is_marker)
    }
}

/// A named type of the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Description paragraphs.
    #[serde(default)]
    pub description: Vec<String>,
    /// Fields in declared order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    /// Polymorphic families this type implements.
    #[serde(default)]
    pub subtype_of: Vec<String>,
}

impl TypeDescriptor {
    /// A type without fields is a pure polymorphic marker.
    pub fn is_marker(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if this type implements the given family.
    pub fn implements(&self, family: &str) -> bool {
        self.subtype_of.iter().any(|parent| parent == family)
    }

    /// Look up a field by wire name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A named operation of the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Description paragraphs.
    #[serde(default)]
    pub description: Vec<String>,
    /// Fields in declared order; required fields become positional arguments.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    /// Return type descriptors: one entry, or a concrete type followed by a boolean.
    #[serde(default)]
    pub returns: Vec<String>,
}

impl MethodDescriptor {
    /// Required fields, in declared order.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.required)
    }

    /// Optional fields, in declared order.
    pub fn optional_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| !f.required)
    }

    /// Look up a field by wire name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A field of a type or a parameter of a method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Wire name (snake_case).
    pub name: String,
    /// Candidate type descriptors; the first one is preferred.
    pub types: Vec<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
}

impl FieldDescriptor {
    /// The preferred (first) candidate descriptor.
    ///
    /// Union-typed fields lose the other candidates here; this is intentional.
    pub fn preferred(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    /// The preferred candidate, parsed.
    pub fn preferred_type(&self) -> Option<WireType> {
        self.preferred().and_then(WireType::parse)
    }

    /// Returns true if any candidate is exactly `descriptor`.
    pub fn accepts(&self, descriptor: &str) -> bool {
        self.types.iter().any(|t| t == descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "version": "Bot API 7.0",
        "types": {
            "ChatMember": {
                "name": "ChatMember",
                "description": ["This object contains information about one member of a chat."],
                "subtypes": ["ChatMemberOwner"]
            },
            "ChatMemberOwner": {
                "name": "ChatMemberOwner",
                "href": "https://core.telegram.org/bots/api#chatmemberowner",
                "fields": [
                    {"name": "status", "types": ["String"], "required": true, "description": "The member's status in the chat, always “creator”"},
                    {"name": "custom_title", "types": ["String"], "required": false, "description": "Optional. Custom title for this user"}
                ],
                "subtype_of": ["ChatMember"]
            }
        },
        "methods": {
            "getChatMember": {
                "name": "getChatMember",
                "fields": [
                    {"name": "chat_id", "types": ["Integer", "String"], "required": true, "description": "Unique identifier"}
                ],
                "returns": ["ChatMember"]
            }
        }
    }"#;

    #[test]
    fn test_deserialize_ignores_unknown_keys() {
        let api: ApiDescription = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(api.version.as_deref(), Some("Bot API 7.0"));
        assert_eq!(api.types.len(), 2);
        assert!(api.is_marker("ChatMember"));
        assert!(!api.is_marker("ChatMemberOwner"));
        assert!(!api.is_marker("Missing"));
    }

    #[test]
    fn test_document_order_is_preserved() {
        let api: ApiDescription = serde_json::from_str(SAMPLE).unwrap();
        let names: Vec<_> = api.types.keys().map(String::as_str).collect();
        assert_eq!(names, ["ChatMember", "ChatMemberOwner"]);
    }

    #[test]
    fn test_type_helpers() {
        let api: ApiDescription = serde_json::from_str(SAMPLE).unwrap();
        let owner = api.type_named("ChatMemberOwner").unwrap();
        assert!(owner.implements("ChatMember"));
        assert!(owner.field("status").unwrap().required);
        assert!(owner.field("missing").is_none());
    }

    #[test]
    fn test_preferred_type_is_first_candidate() {
        let api: ApiDescription = serde_json::from_str(SAMPLE).unwrap();
        let method = api.method_named("getChatMember").unwrap();
        let chat_id = method.field("chat_id").unwrap();
        assert_eq!(chat_id.preferred(), Some("Integer"));
        assert_eq!(chat_id.preferred_type(), Some(WireType::Integer));
        assert!(chat_id.accepts("String"));
        assert_eq!(method.required_fields().count(), 1);
        assert_eq!(method.optional_fields().count(), 0);
    }
}
