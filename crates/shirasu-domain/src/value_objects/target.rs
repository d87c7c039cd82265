//! Message destinations

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::constants::{ACTION_SEND_GROUP_MSG, ACTION_SEND_PRIVATE_MSG};
use crate::events::Event;
use crate::message::Message;

/// Where a message is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "message_type", rename_all = "lowercase")]
pub enum MessageTarget {
    /// A user, privately
    Private {
        /// Recipient
        user_id: i64,
    },
    /// A group
    Group {
        /// Recipient group
        group_id: i64,
    },
}

impl MessageTarget {
    /// Reply destination for an event
    ///
    /// Group events reply to the group; otherwise the user is addressed
    /// privately. `None` when the event carries neither id.
    pub fn from_event(event: &Event) -> Option<Self> {
        if let Some(group_id) = event.group_id() {
            return Some(Self::Group { group_id });
        }
        event.user_id().map(|user_id| Self::Private { user_id })
    }

    /// Action name and parameters that deliver `message` here
    pub fn send_action(&self, message: &Message) -> (&'static str, Value) {
        match *self {
            Self::Private { user_id } => (
                ACTION_SEND_PRIVATE_MSG,
                json!({ "user_id": user_id, "message": message.to_wire() }),
            ),
            Self::Group { group_id } => (
                ACTION_SEND_GROUP_MSG,
                json!({ "group_id": group_id, "message": message.to_wire() }),
            ),
        }
    }
}
