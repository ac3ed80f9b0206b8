//! Per-parameter request encoding strategies.

use schemabind_ir::{FieldDescriptor, WireType};

use super::SchemaIndex;

/// When an optional scalar is written to the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence {
    /// Required parameter; always written.
    Always,
    /// Written when the value differs from its zero value.
    NonZero,
    /// Sentinel parameter; written whenever set, including the empty string.
    WhenSet,
    /// Written when non-zero, or when `sibling` equals `equals`.
    NonZeroUnless { sibling: String, equals: String },
}

/// Whether a file field may travel as a plain string reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePolicy {
    /// Id, URL and upload are all accepted.
    Any,
    /// Only uploads are accepted.
    UploadOnly,
}

/// How one method parameter becomes request data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEncodingStrategy {
    /// String, integer, float or boolean rendered as text.
    Scalar { presence: Presence },
    /// The upload abstraction.
    File { policy: FilePolicy },
    /// A single media descriptor, which may carry attachments.
    Media,
    /// A sequence of media descriptors with indexed attachments.
    MediaSequence,
    /// Anything else, JSON encoded.
    Composite,
}

impl FieldEncodingStrategy {
    /// Choose the strategy for parameter `field` of `method`, given the
    /// resolved descriptor.
    pub fn decide(
        index: &SchemaIndex,
        method: &str,
        field: &FieldDescriptor,
        resolved: &WireType,
    ) -> Self {
        match resolved {
            w if w.is_primitive() => Self::Scalar {
                presence: presence(index, method, field),
            },
            WireType::Named(name) if index.is_file(name) => Self::File {
                policy: if field.accepts("String") {
                    FilePolicy::Any
                } else {
                    FilePolicy::UploadOnly
                },
            },
            WireType::Named(name) if index.is_media(name) => Self::Media,
            WireType::Array(inner)
                if inner.as_named().is_some_and(|name| index.is_media(name)) =>
            {
                Self::MediaSequence
            }
            _ => Self::Composite,
        }
    }

    /// Strategies that may contribute multipart attachments.
    pub fn may_attach(&self) -> bool {
        matches!(self, Self::File { .. } | Self::Media | Self::MediaSequence)
    }
}

fn presence(index: &SchemaIndex, method: &str, field: &FieldDescriptor) -> Presence {
    let overrides = index.overrides();
    if field.required {
        Presence::Always
    } else if overrides.is_nullable(method, &field.name) {
        Presence::WhenSet
    } else if let Some(cond) = overrides.conditional_zero(method, &field.name) {
        Presence::NonZeroUnless {
            sibling: cond.sibling.clone(),
            equals: cond.equals.clone(),
        }
    } else {
        Presence::NonZero
    }
}

#[cfg(test)]
mod tests {
    use schemabind_manifest::Manifest;

    use super::*;
    use crate::schema::FieldMapper;
    use crate::testing::sample_api;

    fn strategy(method: &str, field: &str) -> FieldEncodingStrategy {
        let api = sample_api();
        let index = SchemaIndex::build(&api, &Manifest::default());
        let field = api.method_named(method).unwrap().field(field).unwrap();
        let resolved = FieldMapper::new(&index).resolve(field).unwrap();
        FieldEncodingStrategy::decide(&index, method, field, &resolved)
    }

    #[test]
    fn test_scalars() {
        assert_eq!(
            strategy("sendMessage", "chat_id"),
            FieldEncodingStrategy::Scalar {
                presence: Presence::Always
            }
        );
        assert_eq!(
            strategy("sendMessage", "disable_notification"),
            FieldEncodingStrategy::Scalar {
                presence: Presence::NonZero
            }
        );
        assert_eq!(
            strategy("editForumTopic", "icon_custom_emoji_id"),
            FieldEncodingStrategy::Scalar {
                presence: Presence::WhenSet
            }
        );
        assert_eq!(
            strategy("sendPoll", "correct_option_id"),
            FieldEncodingStrategy::Scalar {
                presence: Presence::NonZeroUnless {
                    sibling: "type".into(),
                    equals: "quiz".into()
                }
            }
        );
    }

    #[test]
    fn test_files() {
        assert_eq!(
            strategy("sendPhoto", "photo"),
            FieldEncodingStrategy::File {
                policy: FilePolicy::Any
            }
        );
        assert_eq!(
            strategy("setStickerSetThumbnail", "thumbnail"),
            FieldEncodingStrategy::File {
                policy: FilePolicy::UploadOnly
            }
        );
    }

    #[test]
    fn test_media_and_composites() {
        assert_eq!(
            strategy("editMessageMedia", "media"),
            FieldEncodingStrategy::Media
        );
        assert_eq!(
            strategy("sendMediaGroup", "media"),
            FieldEncodingStrategy::MediaSequence
        );
        assert_eq!(
            strategy("sendMessage", "reply_markup"),
            FieldEncodingStrategy::Composite
        );
        assert_eq!(
            strategy("sendMessage", "entities"),
            FieldEncodingStrategy::Composite
        );
        assert!(FieldEncodingStrategy::MediaSequence.may_attach());
        assert!(!FieldEncodingStrategy::Composite.may_attach());
    }
}
