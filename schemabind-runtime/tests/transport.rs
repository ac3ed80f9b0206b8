//! Exercises the runtime through a hand-written binding shaped like the
//! generated output.

use std::cell::RefCell;

use schemabind_runtime::{
    AttachPolicy, Error, Family, Implementer, InputFile, MediaParams, Params, Parts, Request,
    RequestOpts, Transport, attach_file, decode, decode_dual, encode_json, encode_media_group,
    is_zero,
};
use serde::{Deserialize, Serialize};

#[derive(Default)]
struct Recorder {
    requests: RefCell<Vec<(String, Params, Option<Parts>)>>,
    response: Vec<u8>,
}

impl Recorder {
    fn responding(response: &str) -> Self {
        Self {
            requests: RefCell::default(),
            response: response.as_bytes().to_vec(),
        }
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
        Ok(self.response.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
struct Keyboard {
    #[serde(default)]
    rows: Option<Vec<Vec<String>>>,
}

impl Serialize for Keyboard {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Shadow<'a> {
            rows: &'a [Vec<String>],
        }
        Shadow {
            rows: self.rows.as_deref().unwrap_or_default(),
        }
        .serialize(serializer)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
struct InputMediaPhoto {
    media: InputFile,
    #[serde(default, skip_serializing_if = "schemabind_runtime::is_zero")]
    caption: String,
}

impl MediaParams for InputMediaPhoto {
    fn media_params(&self, name: &str, parts: &mut Parts) -> Result<serde_json::Value, serde_json::Error> {
        #[derive(Serialize)]
        struct Shadow<'a> {
            #[serde(rename = "type")]
            kind: &'static str,
            media: InputFile,
            #[serde(skip_serializing_if = "schemabind_runtime::is_zero")]
            caption: &'a str,
        }
        serde_json::to_value(Shadow {
            kind: "photo",
            media: self.media.attach(name, parts),
            caption: &self.caption,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
struct Message {
    message_id: i64,
}

#[derive(Debug, Default)]
struct EditTopicOpts {
    icon_custom_emoji_id: Option<String>,
    request_opts: Option<RequestOpts>,
}

#[derive(Default)]
struct SendPollOpts {
    r#type: String,
    correct_option_id: i64,
}

struct Bot<T> {
    transport: T,
}

impl<T: Transport> Bot<T> {
    fn send_message(&self, chat_id: i64, text: &str, reply_markup: Option<&Keyboard>) -> Result<Message, Error> {
        let mut params = Params::new();
        params.insert("chat_id", chat_id.to_string());
        params.insert("text", text);
        if let Some(reply_markup) = reply_markup {
            params.insert("reply_markup", encode_json("reply_markup", reply_markup)?);
        }
        let payload = self.transport.request(Request::new("sendMessage", params))?;
        decode(&payload)
    }

    fn send_photo(&self, chat_id: i64, photo: &InputFile) -> Result<Message, Error> {
        let mut params = Params::new();
        let mut parts = Parts::new();
        params.insert("chat_id", chat_id.to_string());
        attach_file("photo", photo, AttachPolicy::Any, &mut params, &mut parts)?;
        let payload = self
            .transport
            .request(Request::new("sendPhoto", params).with_parts(parts))?;
        decode(&payload)
    }

    fn send_media_group(&self, chat_id: i64, media: &[InputMediaPhoto]) -> Result<Vec<Message>, Error> {
        let mut params = Params::new();
        let mut parts = Parts::new();
        params.insert("chat_id", chat_id.to_string());
        params.insert("media", encode_media_group("media", media, &mut parts)?);
        let payload = self
            .transport
            .request(Request::new("sendMediaGroup", params).with_parts(parts))?;
        decode(&payload)
    }

    fn edit_message_text(&self, text: &str) -> Result<(Option<Message>, bool), Error> {
        let mut params = Params::new();
        params.insert("text", text);
        let payload = self.transport.request(Request::new("editMessageText", params))?;
        decode_dual(&payload)
    }

    fn send_poll(&self, question: &str, opts: Option<&SendPollOpts>) -> Result<Message, Error> {
        let mut params = Params::new();
        params.insert("question", question);
        if let Some(opts) = opts {
            if !is_zero(&opts.r#type) {
                params.insert("type", opts.r#type.as_str());
            }
            if !is_zero(&opts.correct_option_id) || opts.r#type == "quiz" {
                params.insert("correct_option_id", opts.correct_option_id.to_string());
            }
        }
        let payload = self.transport.request(Request::new("sendPoll", params))?;
        decode(&payload)
    }

    fn edit_forum_topic(&self, chat_id: i64, opts: Option<&EditTopicOpts>) -> Result<bool, Error> {
        let mut params = Params::new();
        params.insert("chat_id", chat_id.to_string());
        if let Some(opts) = opts {
            if let Some(icon) = &opts.icon_custom_emoji_id {
                params.insert("icon_custom_emoji_id", icon.as_str());
            }
        }
        let request_opts = opts.and_then(|opts| opts.request_opts.as_ref());
        let payload = self
            .transport
            .request(Request::new("editForumTopic", params).with_opts(request_opts))?;
        decode(&payload)
    }
}

#[test]
fn test_absent_sequence_serializes_as_empty_array() {
    let bot = Bot {
        transport: Recorder::responding(r#"{"message_id": 1}"#),
    };

    bot.send_message(1, "hi", Some(&Keyboard::default())).unwrap();

    let (method, params, parts) = bot.transport.last();
    assert_eq!(method, "sendMessage");
    assert_eq!(params.get("reply_markup"), Some(r#"{"rows":[]}"#));
    assert!(parts.is_none());
}

#[test]
fn test_absent_composite_is_not_sent() {
    let bot = Bot {
        transport: Recorder::responding(r#"{"message_id": 1}"#),
    };

    bot.send_message(1, "hi", None).unwrap();

    let (_, params, _) = bot.transport.last();
    assert!(!params.contains_key("reply_markup"));
}

#[test]
fn test_file_id_and_upload() {
    let bot = Bot {
        transport: Recorder::responding(r#"{"message_id": 2}"#),
    };

    bot.send_photo(1, &InputFile::id("AgAD")).unwrap();
    let (_, params, parts) = bot.transport.last();
    assert_eq!(params.get("photo"), Some("AgAD"));
    assert!(parts.unwrap().is_empty());

    bot.send_photo(1, &InputFile::upload("cat.jpg", vec![1, 2, 3])).unwrap();
    let (_, params, parts) = bot.transport.last();
    let parts = parts.unwrap();
    assert_eq!(params.get("photo"), Some("attach://photo"));
    assert_eq!(parts.get("photo").unwrap().file_name, "cat.jpg");
}

#[test]
fn test_media_group_parts_are_indexed() {
    let bot = Bot {
        transport: Recorder::responding(r#"[{"message_id": 3}, {"message_id": 4}]"#),
    };
    let media = [
        InputMediaPhoto {
            media: InputFile::upload("a.jpg", vec![0]),
            caption: "first".to_string(),
        },
        InputMediaPhoto {
            media: InputFile::id("AgAD"),
            caption: String::new(),
        },
    ];

    let messages = bot.send_media_group(1, &media).unwrap();

    assert_eq!(messages.len(), 2);
    let (_, params, parts) = bot.transport.last();
    assert_eq!(
        params.get("media"),
        Some(r#"[{"caption":"first","media":"attach://media0","type":"photo"},{"media":"AgAD","type":"photo"}]"#)
    );
    let parts = parts.unwrap();
    assert_eq!(parts.len(), 1);
    assert!(parts.get("media0").is_some());
}

#[test]
fn test_dual_return() {
    let bot = Bot {
        transport: Recorder::responding("true"),
    };
    assert_eq!(bot.edit_message_text("x").unwrap(), (None, true));

    let bot = Bot {
        transport: Recorder::responding(r#"{"message_id": 9}"#),
    };
    assert_eq!(
        bot.edit_message_text("x").unwrap(),
        (Some(Message { message_id: 9 }), true)
    );
}

#[test]
fn test_sentinel_empty_string_is_sent() {
    let bot = Bot {
        transport: Recorder::responding("true"),
    };

    let opts = EditTopicOpts {
        icon_custom_emoji_id: Some(String::new()),
        ..Default::default()
    };
    assert!(bot.edit_forum_topic(1, Some(&opts)).unwrap());
    let (_, params, _) = bot.transport.last();
    assert_eq!(params.get("icon_custom_emoji_id"), Some(""));

    bot.edit_forum_topic(1, Some(&EditTopicOpts::default())).unwrap();
    let (_, params, _) = bot.transport.last();
    assert!(!params.contains_key("icon_custom_emoji_id"));
}

#[test]
fn test_quiz_sends_zero_correct_option() {
    let bot = Bot {
        transport: Recorder::responding(r#"{"message_id": 7}"#),
    };

    let quiz = SendPollOpts {
        r#type: "quiz".into(),
        correct_option_id: 0,
    };
    bot.send_poll("2 + 2?", Some(&quiz)).unwrap();
    let (_, params, _) = bot.transport.last();
    assert_eq!(params.get("correct_option_id"), Some("0"));

    let regular = SendPollOpts {
        r#type: "regular".into(),
        correct_option_id: 0,
    };
    bot.send_poll("2 + 2?", Some(&regular)).unwrap();
    let (_, params, _) = bot.transport.last();
    assert_eq!(params.get("type"), Some("regular"));
    assert!(!params.contains_key("correct_option_id"));
}

#[test]
fn test_transport_works_through_references() {
    let recorder = Recorder::responding(r#"{"message_id": 1}"#);
    let bot = Bot {
        transport: &recorder,
    };
    bot.send_message(1, "hi", None).unwrap();
    assert_eq!(recorder.requests.borrow().len(), 1);
}

#[test]
fn test_family_select_drives_decoding() {
    const FAMILY: Family = Family {
        name: "BackgroundFill",
        discriminator: Some("type"),
        implementers: &[
            Implementer {
                name: "BackgroundFillSolid",
                tag: Some("solid"),
                required: &["type", "color"],
                constants: &[],
            },
            Implementer {
                name: "BackgroundFillGradient",
                tag: Some("gradient"),
                required: &["type", "top_color", "bottom_color"],
                constants: &[],
            },
        ],
    };

    let payload = serde_json::json!({"type": "gradient", "top_color": 1, "bottom_color": 2});
    assert_eq!(FAMILY.select(&payload), Ok("BackgroundFillGradient"));
    assert!(is_zero(""));
}
