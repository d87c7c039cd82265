//! WebSocket helpers
//!
//! Maps `tungstenite` messages to JSON values and its errors onto the
//! domain taxonomy, so the reconnect loop can tell a dropped connection
//! from a fatal failure.

use std::io::ErrorKind;

use serde_json::Value;
use shirasu_domain::error::{Error, Result};
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::tungstenite::error::{Error as WsError, ProtocolError};

/// Decode one socket message into a JSON frame
///
/// Control messages yield `None`; a close message is reported as
/// `ConnectionClosed`.
pub fn decode_message(message: WsMessage) -> Result<Option<Value>> {
    match message {
        WsMessage::Text(text) => Ok(Some(serde_json::from_str(&text)?)),
        WsMessage::Binary(bytes) => {
            let text = String::from_utf8(bytes)?;
            Ok(Some(serde_json::from_str(&text)?))
        }
        WsMessage::Close(_) => Err(Error::ConnectionClosed),
        WsMessage::Ping(_) | WsMessage::Pong(_) | WsMessage::Frame(_) => Ok(None),
    }
}

/// Classify a socket error
pub fn map_ws_error(error: WsError) -> Error {
    match error {
        WsError::ConnectionClosed
        | WsError::AlreadyClosed
        | WsError::Protocol(ProtocolError::ResetWithoutClosingHandshake) => Error::ConnectionClosed,
        WsError::Io(io) => match io.kind() {
            ErrorKind::ConnectionRefused => Error::ConnectionRefused,
            ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::BrokenPipe
            | ErrorKind::UnexpectedEof
            | ErrorKind::NotConnected => Error::ConnectionClosed,
            _ => Error::network_with_source("WebSocket I/O failed", io),
        },
        other => Error::network_with_source("WebSocket failure", other),
    }
}
