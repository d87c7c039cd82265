//! Inbound events
//!
//! An [`Event`] is the parsed form of one inbound frame that is not a call
//! response. It is built once per frame and handed to handlers through the
//! injector; nothing keeps it beyond that frame's dispatch.
//!
//! | `post_type` | Variant | Payload |
//! |-------------|---------|---------|
//! | `message` | [`EventKind::Message`] | [`MessageEvent`] |
//! | `notice` | [`EventKind::Notice`] | [`NoticeEvent`] |
//! | `request` | [`EventKind::Request`] | [`RequestEvent`] |
//! | `meta_event` | [`EventKind::MetaEvent`] | [`MetaEvent`] |

mod kinds;

pub use kinds::{MessageEvent, MessageType, MetaEvent, NoticeEvent, RequestEvent};

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::constants::{
    META_EVENT_HEARTBEAT, POST_TYPE_FIELD, POST_TYPE_MESSAGE, POST_TYPE_META_EVENT,
    POST_TYPE_NOTICE, POST_TYPE_REQUEST,
};
use crate::error::{Error, Result};

/// Category-specific payload of an event
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// A chat message
    Message(MessageEvent),
    /// A notice (group member change, poke, ...)
    Notice(NoticeEvent),
    /// A friend or group request
    Request(RequestEvent),
    /// A meta event (heartbeat, lifecycle)
    MetaEvent(MetaEvent),
}

/// One parsed inbound event
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Unix timestamp in seconds
    pub time: i64,
    /// Account id of the bot that received the event
    pub self_id: i64,
    /// Category payload
    pub kind: EventKind,
    raw: Value,
}

impl Event {
    /// Parse an event frame
    ///
    /// `time` and `self_id` default to zero when absent.
    pub fn from_value(raw: Value) -> Result<Self> {
        let post_type = raw
            .get(POST_TYPE_FIELD)
            .and_then(Value::as_str)
            .ok_or_else(|| Error::invalid_argument("event frame has no post_type"))?;

        let kind = match post_type {
            POST_TYPE_MESSAGE => {
                let mut event: MessageEvent = serde_json::from_value(raw.clone())?;
                event.parse_message();
                EventKind::Message(event)
            }
            POST_TYPE_NOTICE => EventKind::Notice(serde_json::from_value(raw.clone())?),
            POST_TYPE_REQUEST => EventKind::Request(serde_json::from_value(raw.clone())?),
            POST_TYPE_META_EVENT => EventKind::MetaEvent(serde_json::from_value(raw.clone())?),
            other => {
                return Err(Error::invalid_argument(format!(
                    "unknown post_type: {other}"
                )));
            }
        };

        Ok(Self {
            time: raw.get("time").and_then(Value::as_i64).unwrap_or_default(),
            self_id: raw.get("self_id").and_then(Value::as_i64).unwrap_or_default(),
            kind,
            raw,
        })
    }

    /// Raw field access
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    /// The frame this event was parsed from
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// The event category as it appears on the wire
    pub fn post_type(&self) -> &'static str {
        match self.kind {
            EventKind::Message(_) => POST_TYPE_MESSAGE,
            EventKind::Notice(_) => POST_TYPE_NOTICE,
            EventKind::Request(_) => POST_TYPE_REQUEST,
            EventKind::MetaEvent(_) => POST_TYPE_META_EVENT,
        }
    }

    /// `time` as a UTC timestamp
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }

    /// The message payload, if this is a message event
    pub fn as_message(&self) -> Option<&MessageEvent> {
        match &self.kind {
            EventKind::Message(message) => Some(message),
            _ => None,
        }
    }

    /// Sender or subject user id
    pub fn user_id(&self) -> Option<i64> {
        self.raw.get("user_id").and_then(Value::as_i64)
    }

    /// Group id, for group-scoped events
    pub fn group_id(&self) -> Option<i64> {
        self.raw.get("group_id").and_then(Value::as_i64)
    }

    /// Whether this is a heartbeat meta event
    pub fn is_heartbeat(&self) -> bool {
        matches!(&self.kind, EventKind::MetaEvent(meta) if meta.meta_event_type == META_EVENT_HEARTBEAT)
    }

    /// Whether this message was addressed to the bot
    ///
    /// True for private messages and for messages that mention `self_id`.
    pub fn is_tome(&self) -> bool {
        self.as_message().is_some_and(|message| {
            message.message_type == MessageType::Private || message.message.mentions(self.self_id)
        })
    }
}

impl TryFrom<Value> for Event {
    type Error = Error;

    fn try_from(raw: Value) -> Result<Self> {
        Self::from_value(raw)
    }
}
