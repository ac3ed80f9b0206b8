//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{path::Path, process::Command};

use eyre::{Result, eyre};
use schemabind_ir::ApiDescription;

/// A small API description exercising every construct the compiler handles:
/// discriminated and shape-dispatched families, placeholders, recursive
/// aggregates, files, media groups, dual returns and both overrides.
pub const SAMPLE_API: &str = r#"{
  "version": "Bot API 7.0",
  "types": {
    "User": {
      "name": "User",
      "href": "https://core.telegram.org/bots/api#user",
      "description": ["This object represents a Telegram user or bot."],
      "fields": [
        {"name": "id", "types": ["Integer"], "required": true, "description": "Unique identifier for this user or bot."},
        {"name": "is_bot", "types": ["Boolean"], "required": true, "description": "True, if this user is a bot"},
        {"name": "first_name", "types": ["String"], "required": true, "description": "User's or bot's first name"},
        {"name": "username", "types": ["String"], "required": false, "description": "Optional. User's or bot's username"}
      ]
    },
    "Chat": {
      "name": "Chat",
      "description": ["This object represents a chat."],
      "fields": [
        {"name": "id", "types": ["Integer"], "required": true, "description": "Unique identifier for this chat."},
        {"name": "type", "types": ["String"], "required": true, "description": "Type of the chat"},
        {"name": "title", "types": ["String"], "required": false, "description": "Optional. Title, for supergroups, channels and group chats"}
      ]
    },
    "Message": {
      "name": "Message",
      "description": ["This object represents a message."],
      "fields": [
        {"name": "message_id", "types": ["Integer"], "required": true, "description": "Unique message identifier inside this chat"},
        {"name": "from", "types": ["User"], "required": false, "description": "Optional. Sender of the message"},
        {"name": "chat", "types": ["Chat"], "required": true, "description": "Chat the message belongs to"},
        {"name": "date", "types": ["Integer"], "required": true, "description": "Date the message was sent in Unix time"},
        {"name": "text", "types": ["String"], "required": false, "description": "Optional. For text messages, the actual UTF-8 text of the message"},
        {"name": "entities", "types": ["Array of MessageEntity"], "required": false, "description": "Optional. Special entities that appear in the text"},
        {"name": "reply_to_message", "types": ["Message"], "required": false, "description": "Optional. For replies, the original message."},
        {"name": "pinned_message", "types": ["MaybeInaccessibleMessage"], "required": false, "description": "Optional. Specified message was pinned."},
        {"name": "reply_markup", "types": ["InlineKeyboardMarkup"], "required": false, "description": "Optional. Inline keyboard attached to the message."}
      ],
      "subtype_of": ["MaybeInaccessibleMessage"]
    },
    "MessageEntity": {
      "name": "MessageEntity",
      "description": ["This object represents one special entity in a text message."],
      "fields": [
        {"name": "type", "types": ["String"], "required": true, "description": "Type of the entity."},
        {"name": "offset", "types": ["Integer"], "required": true, "description": "Offset in UTF-16 code units to the start of the entity"},
        {"name": "length", "types": ["Integer"], "required": true, "description": "Length of the entity in UTF-16 code units"},
        {"name": "url", "types": ["String"], "required": false, "description": "Optional. URL that will be opened after user taps on the text"}
      ]
    },
    "InaccessibleMessage": {
      "name": "InaccessibleMessage",
      "description": ["This object describes a message that was deleted or is otherwise inaccessible to the bot."],
      "fields": [
        {"name": "chat", "types": ["Chat"], "required": true, "description": "Chat the message belonged to"},
        {"name": "message_id", "types": ["Integer"], "required": true, "description": "Unique message identifier inside the chat"},
        {"name": "date", "types": ["Integer"], "required": true, "description": "Always 0. The field can be used to differentiate regular and inaccessible messages."}
      ],
      "subtype_of": ["MaybeInaccessibleMessage"]
    },
    "MaybeInaccessibleMessage": {
      "name": "MaybeInaccessibleMessage",
      "description": ["This object describes a message that can be inaccessible to the bot."],
      "subtypes": ["Message", "InaccessibleMessage"]
    },
    "ChatMember": {
      "name": "ChatMember",
      "description": ["This object contains information about one member of a chat."],
      "subtypes": ["ChatMemberOwner", "ChatMemberMember"]
    },
    "ChatMemberOwner": {
      "name": "ChatMemberOwner",
      "description": ["Represents a chat member that owns the chat."],
      "fields": [
        {"name": "status", "types": ["String"], "required": true, "description": "The member's status in the chat, always “creator”"},
        {"name": "user", "types": ["User"], "required": true, "description": "Information about the user"},
        {"name": "is_anonymous", "types": ["Boolean"], "required": true, "description": "True, if the user's presence in the chat is hidden"},
        {"name": "custom_title", "types": ["String"], "required": false, "description": "Optional. Custom title for this user"}
      ],
      "subtype_of": ["ChatMember"]
    },
    "ChatMemberMember": {
      "name": "ChatMemberMember",
      "description": ["Represents a chat member that has no additional privileges or restrictions."],
      "fields": [
        {"name": "status", "types": ["String"], "required": true, "description": "The member's status in the chat, always “member”"},
        {"name": "user", "types": ["User"], "required": true, "description": "Information about the user"},
        {"name": "until_date", "types": ["Integer"], "required": false, "description": "Optional. Date when the user's subscription will expire; Unix time"}
      ],
      "subtype_of": ["ChatMember"]
    },
    "InlineKeyboardMarkup": {
      "name": "InlineKeyboardMarkup",
      "description": ["This object represents an inline keyboard that appears right next to the message it belongs to."],
      "fields": [
        {"name": "inline_keyboard", "types": ["Array of Array of InlineKeyboardButton"], "required": true, "description": "Array of button rows"}
      ],
      "subtype_of": ["ReplyMarkup"]
    },
    "InlineKeyboardButton": {
      "name": "InlineKeyboardButton",
      "description": ["This object represents one button of an inline keyboard."],
      "fields": [
        {"name": "text", "types": ["String"], "required": true, "description": "Label text on the button"},
        {"name": "url", "types": ["String"], "required": false, "description": "Optional. HTTP or tg:// URL to be opened when the button is pressed."},
        {"name": "callback_data", "types": ["String"], "required": false, "description": "Optional. Data to be sent in a callback query to the bot when the button is pressed"},
        {"name": "callback_game", "types": ["CallbackGame"], "required": false, "description": "Optional. Description of the game that will be launched when the user presses the button."}
      ]
    },
    "CallbackGame": {
      "name": "CallbackGame",
      "description": ["A placeholder, currently holds no information."]
    },
    "ReplyKeyboardRemove": {
      "name": "ReplyKeyboardRemove",
      "description": ["Upon receiving a message with this object, Telegram clients will remove the current custom keyboard."],
      "fields": [
        {"name": "remove_keyboard", "types": ["Boolean"], "required": true, "description": "Requests clients to remove the custom keyboard"},
        {"name": "selective", "types": ["Boolean"], "required": false, "description": "Optional. Use this parameter if you want to remove the keyboard for specific users only."}
      ],
      "subtype_of": ["ReplyMarkup"]
    },
    "ReplyMarkup": {
      "name": "ReplyMarkup",
      "description": ["Additional interface options for a message."]
    },
    "InputFile": {
      "name": "InputFile",
      "description": ["This object represents the contents of a file to be uploaded."]
    },
    "InputMedia": {
      "name": "InputMedia",
      "description": ["This object represents the content of a media message to be sent."]
    },
    "InputMediaPhoto": {
      "name": "InputMediaPhoto",
      "description": ["Represents a photo to be sent."],
      "fields": [
        {"name": "type", "types": ["String"], "required": true, "description": "Type of the result, must be photo"},
        {"name": "media", "types": ["InputFile", "String"], "required": true, "description": "File to send."},
        {"name": "caption", "types": ["String"], "required": false, "description": "Optional. Caption of the photo to be sent"},
        {"name": "has_spoiler", "types": ["Boolean"], "required": false, "description": "Optional. Pass True if the photo needs to be covered with a spoiler animation"}
      ],
      "subtype_of": ["InputMedia"]
    },
    "InputMediaVideo": {
      "name": "InputMediaVideo",
      "description": ["Represents a video to be sent."],
      "fields": [
        {"name": "type", "types": ["String"], "required": true, "description": "Type of the result, must be video"},
        {"name": "media", "types": ["InputFile", "String"], "required": true, "description": "File to send."},
        {"name": "thumbnail", "types": ["InputFile", "String"], "required": false, "description": "Optional. Thumbnail of the file sent"},
        {"name": "caption", "types": ["String"], "required": false, "description": "Optional. Caption of the video to be sent"},
        {"name": "width", "types": ["Integer"], "required": false, "description": "Optional. Video width"}
      ],
      "subtype_of": ["InputMedia"]
    },
    "ForumTopic": {
      "name": "ForumTopic",
      "description": ["This object represents a forum topic."],
      "fields": [
        {"name": "message_thread_id", "types": ["Integer"], "required": true, "description": "Unique identifier of the forum topic"},
        {"name": "name", "types": ["String"], "required": true, "description": "Name of the topic"},
        {"name": "icon_custom_emoji_id", "types": ["String"], "required": false, "description": "Optional. Unique identifier of the custom emoji shown as the topic icon"}
      ]
    }
  },
  "methods": {
    "getMe": {
      "name": "getMe",
      "href": "https://core.telegram.org/bots/api#getme",
      "description": ["A simple method for testing your bot's authentication token.", "Returns basic information about the bot in form of a User object."],
      "returns": ["User"]
    },
    "sendMessage": {
      "name": "sendMessage",
      "description": ["Use this method to send text messages. On success, the sent Message is returned."],
      "fields": [
        {"name": "chat_id", "types": ["Integer", "String"], "required": true, "description": "Unique identifier for the target chat or username of the target channel"},
        {"name": "text", "types": ["String"], "required": true, "description": "Text of the message to be sent"},
        {"name": "entities", "types": ["Array of MessageEntity"], "required": false, "description": "A JSON-serialized list of special entities that appear in message text"},
        {"name": "disable_notification", "types": ["Boolean"], "required": false, "description": "Sends the message silently."},
        {"name": "reply_markup", "types": ["InlineKeyboardMarkup", "ReplyKeyboardRemove"], "required": false, "description": "Additional interface options."}
      ],
      "returns": ["Message"]
    },
    "sendPhoto": {
      "name": "sendPhoto",
      "description": ["Use this method to send photos. On success, the sent Message is returned."],
      "fields": [
        {"name": "chat_id", "types": ["Integer", "String"], "required": true, "description": "Unique identifier for the target chat or username of the target channel"},
        {"name": "photo", "types": ["InputFile", "String"], "required": true, "description": "Photo to send."},
        {"name": "caption", "types": ["String"], "required": false, "description": "Photo caption"}
      ],
      "returns": ["Message"]
    },
    "sendMediaGroup": {
      "name": "sendMediaGroup",
      "description": ["Use this method to send a group of photos or videos as an album."],
      "fields": [
        {"name": "chat_id", "types": ["Integer", "String"], "required": true, "description": "Unique identifier for the target chat or username of the target channel"},
        {"name": "media", "types": ["Array of InputMediaPhoto and InputMediaVideo"], "required": true, "description": "A JSON-serialized array describing messages to be sent"}
      ],
      "returns": ["Array of Message"]
    },
    "sendPoll": {
      "name": "sendPoll",
      "description": ["Use this method to send a native poll. On success, the sent Message is returned."],
      "fields": [
        {"name": "chat_id", "types": ["Integer", "String"], "required": true, "description": "Unique identifier for the target chat or username of the target channel"},
        {"name": "question", "types": ["String"], "required": true, "description": "Poll question"},
        {"name": "options", "types": ["Array of String"], "required": true, "description": "A JSON-serialized list of answer options"},
        {"name": "type", "types": ["String"], "required": false, "description": "Poll type, “quiz” or “regular”, defaults to “regular”"},
        {"name": "correct_option_id", "types": ["Integer"], "required": false, "description": "0-based identifier of the correct answer option, required for polls in quiz mode"}
      ],
      "returns": ["Message"]
    },
    "editMessageText": {
      "name": "editMessageText",
      "description": ["Use this method to edit text and game messages."],
      "fields": [
        {"name": "chat_id", "types": ["Integer", "String"], "required": false, "description": "Required if inline_message_id is not specified."},
        {"name": "message_id", "types": ["Integer"], "required": false, "description": "Required if inline_message_id is not specified."},
        {"name": "inline_message_id", "types": ["String"], "required": false, "description": "Required if chat_id and message_id are not specified."},
        {"name": "text", "types": ["String"], "required": true, "description": "New text of the message"}
      ],
      "returns": ["Message", "True"]
    },
    "editMessageMedia": {
      "name": "editMessageMedia",
      "description": ["Use this method to edit animation, audio, document, photo, or video messages."],
      "fields": [
        {"name": "chat_id", "types": ["Integer", "String"], "required": false, "description": "Required if inline_message_id is not specified."},
        {"name": "message_id", "types": ["Integer"], "required": false, "description": "Required if inline_message_id is not specified."},
        {"name": "media", "types": ["InputMedia"], "required": true, "description": "A JSON-serialized object for a new media content of the message"}
      ],
      "returns": ["Message", "True"]
    },
    "getChatMember": {
      "name": "getChatMember",
      "description": ["Use this method to get information about a member of a chat."],
      "fields": [
        {"name": "chat_id", "types": ["Integer", "String"], "required": true, "description": "Unique identifier for the target chat or username of the target supergroup or channel"},
        {"name": "user_id", "types": ["Integer"], "required": true, "description": "Unique identifier of the target user"}
      ],
      "returns": ["ChatMember"]
    },
    "createForumTopic": {
      "name": "createForumTopic",
      "description": ["Use this method to create a topic in a forum supergroup chat."],
      "fields": [
        {"name": "chat_id", "types": ["Integer", "String"], "required": true, "description": "Unique identifier for the target chat or username of the target supergroup"},
        {"name": "name", "types": ["String"], "required": true, "description": "Topic name"},
        {"name": "icon_custom_emoji_id", "types": ["String"], "required": false, "description": "Unique identifier of the custom emoji shown as the topic icon."}
      ],
      "returns": ["ForumTopic"]
    },
    "editForumTopic": {
      "name": "editForumTopic",
      "description": ["Use this method to edit name and icon of a topic in a forum supergroup chat."],
      "fields": [
        {"name": "chat_id", "types": ["Integer", "String"], "required": true, "description": "Unique identifier for the target chat or username of the target supergroup"},
        {"name": "message_thread_id", "types": ["Integer"], "required": true, "description": "Unique identifier for the target message thread of the forum topic"},
        {"name": "name", "types": ["String"], "required": false, "description": "New topic name."},
        {"name": "icon_custom_emoji_id", "types": ["String"], "required": false, "description": "New unique identifier of the custom emoji shown as the topic icon. Pass an empty string to remove the icon."}
      ],
      "returns": ["True"]
    },
    "setStickerSetThumbnail": {
      "name": "setStickerSetThumbnail",
      "description": ["Use this method to set the thumbnail of a regular or mask sticker set."],
      "fields": [
        {"name": "name", "types": ["String"], "required": true, "description": "Sticker set name"},
        {"name": "thumbnail", "types": ["InputFile"], "required": false, "description": "A .WEBP or .PNG image with the thumbnail."}
      ],
      "returns": ["True"]
    }
  }
}"#;

/// Parse [`SAMPLE_API`].
pub fn sample_api() -> ApiDescription {
    parse_api(SAMPLE_API)
}

/// Parse an API description, panicking on malformed test input.
pub fn parse_api(json: &str) -> ApiDescription {
    match serde_json::from_str(json) {
        Ok(api) => api,
        Err(e) => panic!("invalid test API description: {e}"),
    }
}

/// Error from compile checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Trait for verifying generated code compiles.
pub trait CompileChecker {
    /// Check that the crate in the given directory compiles.
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// Rust compile checker using `cargo check`.
pub struct RustChecker;

impl CompileChecker for RustChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let output = Command::new("cargo")
            .args(["check", "--quiet"])
            .current_dir(dir)
            .output()
            .map_err(|e| CompileError {
                message: format!("Failed to run cargo check: {}", e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            Err(CompileError {
                message: "cargo check failed".to_string(),
                output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
            })
        }
    }
}

/// Runs the scratch crate's own test suite with `cargo test`.
pub struct RustTestRunner;

impl CompileChecker for RustTestRunner {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let output = Command::new("cargo")
            .args(["test", "--quiet"])
            .current_dir(dir)
            .output()
            .map_err(|e| CompileError {
                message: format!("Failed to run cargo test: {}", e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            Err(CompileError {
                message: "cargo test failed".to_string(),
                output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
            })
        }
    }
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Generate code into a temporary directory and return it.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

/// Run a generator into a temporary directory and check the result compiles.
pub fn assert_generates_valid_code<C>(
    generate: impl FnOnce(&Path) -> Result<()>,
    checker: &C,
) -> Result<()>
where
    C: CompileChecker,
{
    let temp_dir = generate_to_temp(generate)?;

    checker.check(temp_dir.path()).map_err(|e| {
        eprintln!("Generated files in {}:", temp_dir.path().display());
        if let Ok(entries) = std::fs::read_dir(temp_dir.path()) {
            for entry in entries.flatten() {
                eprintln!("  {}", entry.path().display());
            }
        }
        eyre!("Compile check failed: {}", e)
    })?;

    Ok(())
}
