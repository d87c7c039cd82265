//! Chat message model
//!
//! A [`Message`] is an ordered list of [`MessageSegment`]s. Messages travel
//! in two encodings:
//!
//! | Encoding | Used for | Produced by |
//! |----------|----------|-------------|
//! | JSON array of `{type, data}` | outbound `send_*_msg` actions | [`Message::to_wire`] |
//! | CQ-code text (`[CQ:at,qq=1]hi`) | inbound `raw_message` fields | [`Message::parse`] / `Display` |
//!
//! The runtime core only needs [`Message::to_wire`] and
//! [`Message::plain_text`]; everything else is for addons.

mod cq;
mod segment;

pub use segment::MessageSegment;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An ordered sequence of message segments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message {
    segments: Vec<MessageSegment>,
}

impl Message {
    /// Create an empty message
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse CQ-code text into a message
    pub fn parse(raw: &str) -> Self {
        Self {
            segments: cq::parse_segments(raw),
        }
    }

    /// Append a segment
    pub fn push(&mut self, segment: MessageSegment) {
        self.segments.push(segment);
    }

    /// Builder-style append
    #[must_use]
    pub fn with(mut self, segment: MessageSegment) -> Self {
        self.push(segment);
        self
    }

    /// The segments of this message
    pub fn segments(&self) -> &[MessageSegment] {
        &self.segments
    }

    /// Whether the message has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Concatenated text of all text segments
    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .filter_map(MessageSegment::as_text)
            .collect()
    }

    /// Whether any `at` segment mentions `user_id`
    pub fn mentions(&self, user_id: i64) -> bool {
        let target = user_id.to_string();
        self.segments
            .iter()
            .any(|s| s.kind == segment::AT && s.data_str("qq") == Some(target.as_str()))
    }

    /// JSON array form used in outbound actions
    pub fn to_wire(&self) -> Value {
        Value::Array(self.segments.iter().map(MessageSegment::to_wire).collect())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::new().with(MessageSegment::text(text))
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::new().with(MessageSegment::text(text))
    }
}

impl From<MessageSegment> for Message {
    fn from(segment: MessageSegment) -> Self {
        Self::new().with(segment)
    }
}

impl FromIterator<MessageSegment> for Message {
    fn from_iter<I: IntoIterator<Item = MessageSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Message {
    type Item = &'a MessageSegment;
    type IntoIter = std::slice::Iter<'a, MessageSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
