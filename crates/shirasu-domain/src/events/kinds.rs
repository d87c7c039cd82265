//! Category payloads

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Private or group chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// One-to-one chat
    Private,
    /// Group chat
    Group,
}

/// Payload of a `message` event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEvent {
    /// Private or group
    pub message_type: MessageType,
    /// Sender
    pub user_id: i64,
    /// Group the message was sent in
    #[serde(default)]
    pub group_id: Option<i64>,
    /// Message id assigned by the implementation
    #[serde(default)]
    pub message_id: Option<i64>,
    /// CQ-code text of the message
    pub raw_message: String,
    /// `raw_message` parsed into segments
    #[serde(skip)]
    pub message: Message,
}

impl MessageEvent {
    pub(crate) fn parse_message(&mut self) {
        self.message = Message::parse(&self.raw_message);
    }
}

/// Payload of a `notice` event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoticeEvent {
    pub notice_type: String,
    #[serde(default)]
    pub sub_type: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub group_id: Option<i64>,
}

/// Payload of a `request` event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEvent {
    pub request_type: String,
    #[serde(default)]
    pub sub_type: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub group_id: Option<i64>,
    /// Verification message
    #[serde(default)]
    pub comment: Option<String>,
    /// Token used to approve or reject the request
    #[serde(default)]
    pub flag: Option<String>,
}

/// Payload of a `meta_event` event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaEvent {
    pub meta_event_type: String,
    #[serde(default)]
    pub sub_type: Option<String>,
}
