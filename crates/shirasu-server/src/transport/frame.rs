//! Frame shapes
//!
//! Outbound: `{"action": .., "params": {..}, "echo": <id>}`.
//! Inbound frames with an `echo` field answer a call; every other frame is
//! an event.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shirasu_domain::Event;
use shirasu_domain::constants::STATUS_FAILED;
use shirasu_domain::error::{Error, Result};

use crate::constants::ECHO_FIELD;

/// Outbound action call
#[derive(Debug, Clone, Serialize)]
pub struct ActionRequest<'a> {
    pub action: &'a str,
    pub params: Value,
    pub echo: u64,
}

/// Inbound response to an action call
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActionResponse {
    /// Correlation id as sent back by the peer
    #[serde(default)]
    pub echo: Value,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub retcode: i64,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub wording: String,
}

impl ActionResponse {
    /// The correlation id, if it is one this runtime could have issued
    ///
    /// Some implementations echo the id back as a string.
    pub fn id(&self) -> Option<u64> {
        match &self.echo {
            Value::Number(number) => number.as_u64(),
            Value::String(text) => text.parse().ok(),
            _ => None,
        }
    }

    /// Whether the peer reported a failure
    pub fn is_failed(&self) -> bool {
        self.status == STATUS_FAILED
    }

    /// Payload of a successful call, or the failure as an error
    ///
    /// A missing or null payload becomes an empty object.
    pub fn into_data(self, action: &str) -> Result<Value> {
        if self.is_failed() {
            return Err(Error::ActionFailed {
                action: action.to_string(),
                retcode: self.retcode,
                msg: self.msg,
                wording: self.wording,
            });
        }
        Ok(match self.data {
            Value::Null => Value::Object(Map::new()),
            data => data,
        })
    }
}

/// A classified inbound frame
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Response(ActionResponse),
    Event(Event),
}

impl Frame {
    /// Split responses from events
    pub fn classify(value: Value) -> Result<Self> {
        if value.get(ECHO_FIELD).is_some() {
            return Ok(Self::Response(serde_json::from_value(value)?));
        }
        Ok(Self::Event(Event::from_value(value)?))
    }
}
