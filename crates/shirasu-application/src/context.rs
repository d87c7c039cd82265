//! Handler context
//!
//! [`Context`] bundles what a handler usually needs for one frame: the
//! session client, the event, the captured command arguments and the bot
//! settings. It is published under the `ctx` dependency name.

use std::sync::Arc;

use serde_json::Value;
use shirasu_domain::error::Result;
use shirasu_domain::events::Event;
use shirasu_domain::message::Message;
use shirasu_domain::ports::Client;
use shirasu_domain::value_objects::{BotSettings, MessageTarget};
use tracing::warn;

use crate::addon::CommandArgs;

/// Per-frame view for handlers
#[derive(Clone)]
pub struct Context {
    client: Arc<dyn Client>,
    event: Arc<Event>,
    args: Arc<CommandArgs>,
    config: Arc<BotSettings>,
}

impl Context {
    pub fn new(
        client: Arc<dyn Client>,
        event: Arc<Event>,
        args: Arc<CommandArgs>,
        config: Arc<BotSettings>,
    ) -> Self {
        Self {
            client,
            event,
            args,
            config,
        }
    }

    pub fn client(&self) -> &Arc<dyn Client> {
        &self.client
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    pub fn config(&self) -> &BotSettings {
        &self.config
    }

    /// Captured command argument text
    pub fn arg(&self) -> String {
        self.args.text()
    }

    /// Captured command arguments split on whitespace
    pub fn args(&self) -> Vec<String> {
        self.args.split()
    }

    /// Where replies to this event go
    pub fn target(&self) -> Option<MessageTarget> {
        MessageTarget::from_event(&self.event)
    }

    /// Reply to the event
    ///
    /// Returns the message id, or `-1` when the event names neither a group
    /// nor a user.
    pub async fn send<M: Into<Message>>(&self, message: M) -> Result<i64> {
        self.reply(message.into(), false).await
    }

    /// Reply with a rejection
    pub async fn reject<M: Into<Message>>(&self, message: M) -> Result<i64> {
        self.reply(message.into(), true).await
    }

    /// Call a remote action on the session
    pub async fn call_action(&self, action: &str, params: Value) -> Result<Value> {
        self.client.call_action(action, params).await
    }

    async fn reply(&self, message: Message, is_rejected: bool) -> Result<i64> {
        let Some(target) = self.target() else {
            warn!(
                post_type = self.event.post_type(),
                "Attempted to send message without group id or user id in the context"
            );
            return Ok(-1);
        };
        self.client.send_msg(&target, message, is_rejected).await
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("event", &self.event)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}
