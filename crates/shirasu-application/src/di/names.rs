//! Well-known dependency names
//!
//! | Name | Type | Scope |
//! |------|------|-------|
//! | [`CLIENT`] | `Arc<dyn Client>` | frame |
//! | [`EVENT`] | `Arc<Event>` | frame |
//! | [`CTX`] | `Context` | frame |
//! | [`ARGS`] | `Arc<CommandArgs>` | frame |
//! | [`CONFIG`] | `Arc<BotSettings>` | process |
//! | [`POOL`] | `Arc<AddonPool>` | process |

/// Session client
pub const CLIENT: &str = "client";

/// Event being dispatched
pub const EVENT: &str = "event";

/// Handler context
pub const CTX: &str = "ctx";

/// Command arguments captured by `command` rules
pub const ARGS: &str = "args";

/// Bot settings
pub const CONFIG: &str = "config";

/// Addon pool
pub const POOL: &str = "pool";
