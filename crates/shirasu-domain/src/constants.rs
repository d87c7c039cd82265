//! Domain constants
//!
//! Field values of the OneBot v11 wire protocol that the runtime inspects.

// ============================================================================
// EVENT CATEGORIES
// ============================================================================

/// Field carrying the event category
pub const POST_TYPE_FIELD: &str = "post_type";

/// Chat message events
pub const POST_TYPE_MESSAGE: &str = "message";

/// Notice events
pub const POST_TYPE_NOTICE: &str = "notice";

/// Friend and group request events
pub const POST_TYPE_REQUEST: &str = "request";

/// Meta events (heartbeat, lifecycle)
pub const POST_TYPE_META_EVENT: &str = "meta_event";

/// Meta event type of heartbeats, dropped before dispatch
pub const META_EVENT_HEARTBEAT: &str = "heartbeat";

/// Meta event type of lifecycle notifications
pub const META_EVENT_LIFECYCLE: &str = "lifecycle";

// ============================================================================
// ACTIONS
// ============================================================================

/// Send a private message
pub const ACTION_SEND_PRIVATE_MSG: &str = "send_private_msg";

/// Send a group message
pub const ACTION_SEND_GROUP_MSG: &str = "send_group_msg";

/// Response status signalling failure
pub const STATUS_FAILED: &str = "failed";

// ============================================================================
// BOT DEFAULTS
// ============================================================================

/// Default command prefix
pub const DEFAULT_COMMAND_START: &str = "/";

/// Default `call_action` timeout in milliseconds
pub const DEFAULT_CALL_TIMEOUT_MS: u64 = 30_000;
