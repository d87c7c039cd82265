//! # shirasu
//!
//! A OneBot v11 bot runtime. Inbound events are fanned out to addons; each
//! addon guards its handler with a composable [`Rule`] and receives its
//! inputs from a name-keyed [`Injector`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use shirasu::addon::rules;
//! use shirasu::di::{Injectable, names};
//! use shirasu::{Addon, AddonPool, Context, MockClient};
//!
//! # async fn demo() -> shirasu::Result<()> {
//! let ping = Addon::new("ping", "/ping", "Replies pong.").with_receiver(
//!     rules::command("ping"),
//!     Injectable::new([names::CTX], |deps| async move {
//!         let ctx: Context = deps.get(names::CTX)?;
//!         ctx.send("pong").await?;
//!         Ok(())
//!     }),
//! );
//!
//! let mut pool = AddonPool::new();
//! pool.load(ping)?;
//! let client = MockClient::new(pool)?;
//! client.post_message("/ping").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - errors, events, messages, the `Client` port
//! - `application` - injector, rules, addons, pool, dispatcher
//! - `infrastructure` - configuration, logging, correlation, retry
//! - `server` - WebSocket connection core and the mock client
//! - `providers` - built-in addon modules

/// Domain layer - errors, events and messages
pub mod domain {
    pub use shirasu_domain::*;
}

/// Application layer - injector, rules, addons and dispatch
pub mod application {
    pub use shirasu_application::*;
}

/// Infrastructure layer - configuration, logging and runtime support
pub mod infrastructure {
    pub use shirasu_infrastructure::*;
}

/// Server layer - connection core and mock client
pub mod server {
    pub use shirasu_server::*;
}

/// Built-in addon modules
pub mod providers {
    pub use shirasu_providers::*;
}

/// Command line interface
pub mod cli;

pub use application::{addon, di};
pub use application::{Addon, AddonPool, Context, Injectable, Injector, Rule};
pub use domain::*;
pub use server::{Connection, MockClient, run};
