//! Behaviour of the bindings generated from the sample API description.
//!
//! Copied into a scratch crate next to the generated `src/api` module and run
//! with `cargo test` there.

use std::cell::RefCell;

use generated_bindings::*;
use schemabind_runtime::{Error, InputFile, Params, Parts, Request, Transport};

#[derive(Default)]
struct Recorder {
    requests: RefCell<Vec<(String, Params, Option<Parts>)>>,
    response: RefCell<Vec<u8>>,
}

impl Recorder {
    fn responding(response: &str) -> Self {
        let recorder = Self::default();
        recorder.respond(response);
        recorder
    }

    fn respond(&self, response: &str) {
        *self.response.borrow_mut() = response.as_bytes().to_vec();
    }

    fn last(&self) -> (String, Params, Option<Parts>) {
        self.requests.borrow().last().cloned().unwrap()
    }
}

impl Transport for Recorder {
    fn request(&self, request: Request<'_>) -> Result<Vec<u8>, Error> {
        self.requests.borrow_mut().push((
            request.method.to_string(),
            request.params,
            request.parts,
        ));
        Ok(self.response.borrow().clone())
    }
}

const MESSAGE: &str = r#"{"message_id": 7, "chat": {"id": 1, "type": "private"}, "date": 1700000000}"#;

fn user() -> User {
    User {
        id: 42,
        is_bot: false,
        first_name: "Ada".into(),
        username: "ada".into(),
    }
}

fn chat() -> Chat {
    Chat {
        id: -100,
        r#type: "supergroup".into(),
        title: "Engines".into(),
    }
}

fn entity() -> MessageEntity {
    MessageEntity {
        r#type: "text_link".into(),
        offset: 0,
        length: 5,
        url: "https://example.com".into(),
    }
}

#[test]
fn quiz_sends_zero_correct_option() {
    let recorder = Recorder::responding(MESSAGE);
    let bot = Bot::new(&recorder);
    let options = ["3".to_string(), "4".to_string()];

    let quiz = SendPollOpts {
        r#type: "quiz".into(),
        correct_option_id: 0,
        ..Default::default()
    };
    bot.send_poll(1, "2 + 2?", &options, Some(&quiz)).unwrap();
    let (method, params, _) = recorder.last();
    assert_eq!(method, "sendPoll");
    assert_eq!(params.get("type"), Some("quiz"));
    assert_eq!(params.get("correct_option_id"), Some("0"));
    assert_eq!(params.get("options"), Some(r#"["3","4"]"#));

    let regular = SendPollOpts {
        r#type: "regular".into(),
        ..Default::default()
    };
    bot.send_poll(1, "2 + 2?", &options, Some(&regular)).unwrap();
    let (_, params, _) = recorder.last();
    assert!(!params.contains_key("correct_option_id"));
}

#[test]
fn sentinel_empty_string_is_sent() {
    let recorder = Recorder::responding("true");
    let bot = Bot::new(&recorder);

    let clear = EditForumTopicOpts {
        icon_custom_emoji_id: Some(String::new()),
        ..Default::default()
    };
    assert!(bot.edit_forum_topic(1, 5, Some(&clear)).unwrap());
    let (_, params, _) = recorder.last();
    assert_eq!(params.get("icon_custom_emoji_id"), Some(""));
    assert!(!params.contains_key("name"));

    bot.edit_forum_topic(1, 5, Some(&EditForumTopicOpts::default())).unwrap();
    let (_, params, _) = recorder.last();
    assert!(!params.contains_key("icon_custom_emoji_id"));
}

#[test]
fn file_reference_and_upload() {
    let recorder = Recorder::responding(MESSAGE);
    let bot = Bot::new(&recorder);

    bot.send_photo(1, &InputFile::id("AgAD"), None).unwrap();
    let (_, params, parts) = recorder.last();
    assert_eq!(params.get("photo"), Some("AgAD"));
    assert!(parts.is_none_or(|parts| parts.is_empty()));

    bot.send_photo(1, &InputFile::upload("cat.jpg", vec![1, 2, 3]), None)
        .unwrap();
    let (_, params, parts) = recorder.last();
    assert_eq!(params.get("photo"), Some("attach://photo"));
    assert_eq!(parts.unwrap().get("photo").unwrap().file_name, "cat.jpg");
}

#[test]
fn upload_only_parameter_rejects_references() {
    let recorder = Recorder::responding("true");
    let bot = Bot::new(&recorder);

    let opts = SetStickerSetThumbnailOpts {
        thumbnail: Some(InputFile::id("AgAD")),
        ..Default::default()
    };
    let err = bot.set_sticker_set_thumbnail("pack", Some(&opts)).unwrap_err();
    assert!(matches!(err, Error::FileKind { .. }));
    assert!(recorder.requests.borrow().is_empty());
}

#[test]
fn media_group_parts_are_indexed() {
    let recorder = Recorder::responding(&format!("[{MESSAGE}, {MESSAGE}]"));
    let bot = Bot::new(&recorder);
    let media = [
        InputMedia::Photo(InputMediaPhoto {
            media: InputFile::upload("a.jpg", vec![0]),
            caption: "first".into(),
            ..Default::default()
        }),
        InputMedia::Video(InputMediaVideo {
            media: InputFile::id("BAAD"),
            thumbnail: Some(InputFile::upload("thumb.jpg", vec![1])),
            ..Default::default()
        }),
    ];

    let sent = bot.send_media_group(1, &media, None).unwrap();
    assert_eq!(sent.len(), 2);

    let (_, params, parts) = recorder.last();
    let names: Vec<&str> = parts
        .as_ref()
        .unwrap()
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();
    assert_eq!(names, ["media0", "media1_thumbnail"]);

    let encoded: serde_json::Value = serde_json::from_str(params.get("media").unwrap()).unwrap();
    assert_eq!(encoded[0]["type"], "photo");
    assert_eq!(encoded[0]["media"], "attach://media0");
    assert_eq!(encoded[1]["type"], "video");
    assert_eq!(encoded[1]["media"], "BAAD");
    assert_eq!(encoded[1]["thumbnail"], "attach://media1_thumbnail");
}

#[test]
fn dual_return_decodes_both_shapes() {
    let recorder = Recorder::responding("true");
    let bot = Bot::new(&recorder);

    let (message, flag) = bot.edit_message_text("edited", None).unwrap();
    assert_eq!(message, None);
    assert!(flag);

    recorder.respond(MESSAGE);
    let (message, flag) = bot.edit_message_text("edited", None).unwrap();
    assert_eq!(message.unwrap().message_id, 7);
    assert!(flag);

    recorder.respond("42");
    assert!(matches!(
        bot.edit_message_text("edited", None),
        Err(Error::Decode(_))
    ));
}

#[test]
fn discriminated_family_decodes_by_tag() {
    let recorder = Recorder::responding(
        r#"{"status": "creator", "user": {"id": 1, "is_bot": false, "first_name": "A"}, "is_anonymous": true}"#,
    );
    let bot = Bot::new(&recorder);

    let member = bot.get_chat_member(1, 1, None).unwrap();
    assert!(matches!(member, ChatMember::Owner(owner) if owner.is_anonymous));
}

#[test]
fn inaccessible_message_is_told_apart_by_date() {
    let inaccessible: MaybeInaccessibleMessage = serde_json::from_str(
        r#"{"message_id": 1, "chat": {"id": 2, "type": "private"}, "date": 0}"#,
    )
    .unwrap();
    assert!(matches!(
        inaccessible,
        MaybeInaccessibleMessage::InaccessibleMessage(_)
    ));

    let regular: MaybeInaccessibleMessage = serde_json::from_str(MESSAGE).unwrap();
    assert!(matches!(regular, MaybeInaccessibleMessage::Message(_)));
}

#[test]
fn absent_sequence_serializes_as_empty_array() {
    let markup = InlineKeyboardMarkup::default();
    assert_eq!(
        serde_json::to_string(&markup).unwrap(),
        r#"{"inline_keyboard":[]}"#
    );
}

#[test]
fn populated_message_survives_encode_then_decode() {
    let reply = Message {
        message_id: 6,
        from: Some(Box::new(user())),
        chat: chat(),
        date: 1699999999,
        text: "Hello".into(),
        entities: Some(vec![entity()]),
        ..Default::default()
    };
    let message = Message {
        message_id: 7,
        from: Some(Box::new(user())),
        chat: chat(),
        date: 1700000000,
        text: "Hello again".into(),
        entities: Some(vec![entity()]),
        reply_to_message: Some(Box::new(reply)),
        pinned_message: Some(Box::new(MaybeInaccessibleMessage::InaccessibleMessage(
            InaccessibleMessage {
                chat: chat(),
                message_id: 3,
                date: 0,
            },
        ))),
        reply_markup: Some(Box::new(InlineKeyboardMarkup {
            inline_keyboard: vec![vec![InlineKeyboardButton {
                text: "Play".into(),
                url: "https://example.com/play".into(),
                callback_data: "play".into(),
                callback_game: Some(Box::new(CallbackGame {})),
            }]],
        })),
    };

    let encoded = serde_json::to_string(&message).unwrap();
    let decoded: Message = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, message);
}
