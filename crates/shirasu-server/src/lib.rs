//! # shirasu Server
//!
//! Connection core of the shirasu OneBot runtime.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shirasu_server::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Defaults, ./shirasu.toml or the user config dir, then SHIRASU_* variables
//!     run(None).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!              ┌──────────── session ────────────┐
//! OneBot ◀───▶ │ writer ◀── mpsc ◀── OneBotClient │ ◀── handlers
//!  impl        │ reader ──▶ Frame::classify       │
//!              │   ├─ response ─▶ CorrelationTable│
//!              │   └─ event ────▶ JoinSet task ───┼──▶ EventDispatcher
//!              └─────────────────────────────────┘
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Connection`] | Owns the socket, runs sessions and reconnects |
//! | [`OneBotClient`] | Per-session [`Client`](shirasu_domain::ports::Client) that calls actions |
//! | [`MockClient`] | Socket-free client that records replies, for addon tests |

pub mod client;
pub mod connection;
pub mod constants;
pub mod init;
pub mod mock;
pub mod transport;

pub use client::OneBotClient;
pub use connection::{Connection, ConnectionState};
pub use init::run;
pub use mock::{MockClient, SentMessage};
