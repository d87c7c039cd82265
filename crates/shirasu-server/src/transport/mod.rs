//! Wire transport
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`frame`] | Call, response and event frame shapes |
//! | [`websocket`] | Socket message decoding and error classification |

pub mod frame;
pub mod websocket;

pub use frame::{ActionRequest, ActionResponse, Frame};
pub use websocket::{decode_message, map_ws_error};
