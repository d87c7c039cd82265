//! Server constants

/// Outbound frames buffered per session before senders wait
pub const OUTBOUND_QUEUE_CAPACITY: usize = 256;

/// Response field carrying the correlation id
pub const ECHO_FIELD: &str = "echo";
