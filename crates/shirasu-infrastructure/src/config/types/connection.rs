//! Connection configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_RECONNECT_DELAY_MS, DEFAULT_WS_URL};

/// Connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// OneBot WebSocket endpoint
    pub url: String,

    /// Fixed delay between reconnect attempts (milliseconds)
    pub reconnect_delay_ms: u64,

    /// Give up after this many attempts; unset retries forever
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_reconnect_attempts: Option<u32>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_WS_URL.to_string(),
            reconnect_delay_ms: DEFAULT_RECONNECT_DELAY_MS,
            max_reconnect_attempts: None,
        }
    }
}

impl ConnectionConfig {
    /// Reconnect delay as a duration
    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms)
    }
}
