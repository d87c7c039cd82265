//! Session client
//!
//! [`OneBotClient`] is the [`Client`] handed to handlers while a session is
//! listening. Calls are queued to the session writer and answered through
//! the connection's correlation table.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use shirasu_domain::error::{Error, Result};
use shirasu_domain::ports::Client;
use shirasu_infrastructure::CorrelationTable;
use tokio::sync::mpsc;
use tracing::debug;

use crate::transport::{ActionRequest, ActionResponse};

/// Calls actions over one session
#[derive(Debug, Clone)]
pub struct OneBotClient {
    outbound: mpsc::Sender<String>,
    calls: Arc<CorrelationTable<ActionResponse>>,
    call_timeout: Duration,
}

impl OneBotClient {
    pub fn new(
        outbound: mpsc::Sender<String>,
        calls: Arc<CorrelationTable<ActionResponse>>,
        call_timeout: Duration,
    ) -> Self {
        Self {
            outbound,
            calls,
            call_timeout,
        }
    }

    /// Default timeout of [`Client::call_action`]
    pub fn call_timeout(&self) -> Duration {
        self.call_timeout
    }

    /// Call `action` and wait at most `timeout` for the response
    ///
    /// A response with status `failed` becomes `Error::ActionFailed`
    /// carrying the peer's `msg` and `wording`.
    pub async fn call_action_with_timeout(
        &self,
        action: &str,
        params: Value,
        timeout: Duration,
    ) -> Result<Value> {
        let echo = self.calls.register();
        let frame = match serde_json::to_string(&ActionRequest {
            action,
            params,
            echo,
        }) {
            Ok(frame) => frame,
            Err(e) => {
                self.calls.discard(echo);
                return Err(e.into());
            }
        };

        debug!(action = %action, echo, "Calling action");
        if self.outbound.send(frame).await.is_err() {
            self.calls.discard(echo);
            return Err(Error::ConnectionClosed);
        }

        let response = self.calls.get(echo, timeout).await?;
        response.into_data(action)
    }
}

#[async_trait]
impl Client for OneBotClient {
    async fn call_action(&self, action: &str, params: Value) -> Result<Value> {
        self.call_action_with_timeout(action, params, self.call_timeout)
            .await
    }
}
