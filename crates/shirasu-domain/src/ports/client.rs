//! Session client port
//!
//! Handlers never see the socket. They call actions on the remote OneBot
//! implementation through a [`Client`], which the connection core provides
//! per session and tests replace with a mock.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::message::Message;
use crate::value_objects::MessageTarget;

/// Outbound side of a session
#[async_trait]
pub trait Client: Send + Sync {
    /// Call a remote action and return its `data` payload
    async fn call_action(&self, action: &str, params: Value) -> Result<Value>;

    /// Send a message and return its message id
    ///
    /// `is_rejected` marks replies that refuse a request. The wire form is
    /// the same; recording clients keep the flag.
    async fn send_msg(
        &self,
        target: &MessageTarget,
        message: Message,
        _is_rejected: bool,
    ) -> Result<i64> {
        let (action, params) = target.send_action(&message);
        let data = self.call_action(action, params).await?;
        Ok(data
            .get("message_id")
            .and_then(Value::as_i64)
            .unwrap_or(-1))
    }
}
