//! Bot settings
//!
//! The `[bot]` configuration block. It lives in the domain so that rules and
//! addons can read it through the injector.

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{DEFAULT_CALL_TIMEOUT_MS, DEFAULT_COMMAND_START};
use crate::error::{Error, Result};

/// Settings consumed by rules, addons and the session client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotSettings {
    /// Prefixes that start a command
    pub command_start: Vec<String>,
    /// Privileged user ids
    pub superusers: Vec<i64>,
    /// Default `call_action` timeout in milliseconds
    pub call_timeout_ms: u64,
    /// Addon modules to load; empty loads every registered module
    pub modules: Vec<String>,
    /// Addons disabled at startup
    pub disabled: Vec<String>,
    /// Per-addon configuration blocks keyed by addon name
    pub addons: HashMap<String, Value>,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            command_start: vec![DEFAULT_COMMAND_START.to_string()],
            superusers: Vec::new(),
            call_timeout_ms: DEFAULT_CALL_TIMEOUT_MS,
            modules: Vec::new(),
            disabled: Vec::new(),
            addons: HashMap::new(),
        }
    }
}

impl BotSettings {
    /// Default `call_action` timeout
    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }

    /// Whether `user_id` is a superuser
    pub fn is_superuser(&self, user_id: i64) -> bool {
        self.superusers.contains(&user_id)
    }

    /// Deserialize the configuration block of one addon
    ///
    /// Returns `Ok(None)` when the addon has no block.
    pub fn addon_config<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        self.addons
            .get(name)
            .map(|block| {
                serde_json::from_value(block.clone()).map_err(|e| {
                    Error::configuration_with_source(format!("invalid config for addon {name}"), e)
                })
            })
            .transpose()
    }
}
