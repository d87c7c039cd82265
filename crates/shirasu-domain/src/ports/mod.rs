//! Domain ports
//!
//! | Port | Implemented by |
//! |------|----------------|
//! | [`Client`] | the WebSocket session client and the test mock |

/// Session client port
pub mod client;

pub use client::Client;
