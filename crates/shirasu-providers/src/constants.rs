// ============================================================================
// hello
// ============================================================================

/// Reply to `hello`
pub const HELLO_REPLY: &str = "world";

// ============================================================================
// help
// ============================================================================

/// Prefix of the addon list
pub const HELP_AVAILABLE_PREFIX: &str = "Available addons: ";

// ============================================================================
// manage
// ============================================================================

/// `manage` mode that disables an addon
pub const MANAGE_DISABLE: &str = "disable";

/// `manage` mode that enables an addon
pub const MANAGE_ENABLE: &str = "enable";

/// Rejection for a wrong argument count
pub const MANAGE_INVALID_ARGS: &str = "args count is invalid.";

// ============================================================================
// reject_tome
// ============================================================================

/// Rejection sent to messages addressed to the bot
pub const REJECT_TOME_REPLY: &str = "Do not send message to me!";
