//! Application configuration root

use serde::{Deserialize, Serialize};
use shirasu_domain::BotSettings;

use super::{ConnectionConfig, LoggingConfig};

/// Complete configuration, loaded once at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Connection endpoint and reconnect policy
    pub connection: ConnectionConfig,
    /// Bot behavior and per-addon blocks
    pub bot: BotSettings,
    /// Logging
    pub logging: LoggingConfig,
}
