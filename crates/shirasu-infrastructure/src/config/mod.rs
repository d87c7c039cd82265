//! Configuration
//!
//! | Section | Type | Owner |
//! |---------|------|-------|
//! | `[connection]` | [`ConnectionConfig`] | connection core |
//! | `[bot]` | [`BotSettings`](shirasu_domain::BotSettings) | rules and addons |
//! | `[logging]` | [`LoggingConfig`] | logging setup |

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader, ConfigSource};
pub use types::{AppConfig, ConnectionConfig, LoggingConfig};
