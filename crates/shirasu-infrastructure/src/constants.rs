//! Infrastructure layer constants
//!
//! Domain-level defaults live in `shirasu_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "shirasu.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "shirasu";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SHIRASU";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// CONNECTION CONSTANTS
// ============================================================================

/// Default OneBot WebSocket endpoint
pub const DEFAULT_WS_URL: &str = "ws://127.0.0.1:8080";

/// Default delay between reconnect attempts in milliseconds
pub const DEFAULT_RECONNECT_DELAY_MS: u64 = 5_000;

/// Accepted endpoint schemes
pub const WS_SCHEMES: [&str; 2] = ["ws://", "wss://"];

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_FILTER: &str = "SHIRASU_LOG";

/// File name prefix used when the configured log path has none
pub const DEFAULT_LOG_FILE_PREFIX: &str = "shirasu";
