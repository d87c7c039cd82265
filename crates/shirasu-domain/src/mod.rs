//! # Domain Layer
//!
//! Core types of the shirasu bot runtime. Nothing here performs I/O; the
//! crate only describes what flows through the system.
//!
//! ## Architecture
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`events`] | Parsed inbound OneBot events |
//! | [`message`] | Message segments and the CQ-code text format |
//! | [`ports`] | The [`Client`](ports::Client) port handlers talk through |
//! | [`value_objects`] | Bot settings and message targets |
//! | [`constants`] | Wire field values and action names |
//!
//! ## Example
//!
//! ```
//! use shirasu_domain::message::{Message, MessageSegment};
//!
//! let message = Message::parse("[CQ:at,qq=10]hi");
//! assert_eq!(message.segments()[0], MessageSegment::at(10));
//! assert_eq!(message.plain_text(), "hi");
//! ```

/// Wire-level constants
pub mod constants;
/// Error types
pub mod error;
/// Inbound events
pub mod events;
/// Message model and codec
pub mod message;
/// Ports implemented by outer layers
pub mod ports;
/// Value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use events::{Event, EventKind, MessageEvent, MessageType, MetaEvent, NoticeEvent, RequestEvent};
pub use message::{Message, MessageSegment};
pub use ports::Client;
pub use value_objects::{BotSettings, MessageTarget};
