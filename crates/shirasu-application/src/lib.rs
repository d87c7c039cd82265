//! Application Layer - shirasu
//!
//! Everything between an inbound event and the handlers that react to it.
//!
//! ## Architecture
//!
//! ```text
//! Event ──▶ EventDispatcher ──▶ per-frame Injector scope
//!                                   │  event, args, client, ctx
//!                                   ▼
//!              AddonPool::get_enabled_addons() (concurrent fan-out)
//!                                   │
//!                    Rule::matches ─┴─▶ handler (both injected)
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Name-keyed async dependency injector |
//! | [`addon`] | Rules, addons, the addon pool and the module registry |
//! | [`context`] | Handler-facing [`Context`] |
//! | [`dispatch`] | [`EventDispatcher`] |
//!
//! ## Dependencies
//!
//! This crate depends only on `shirasu-domain` and pure libraries. The
//! session client arrives through the domain `Client` port.

pub mod addon;
pub mod context;
pub mod di;
pub mod dispatch;

pub use addon::{Addon, AddonModuleEntry, AddonPool, CommandArgs, Rule};
pub use context::Context;
pub use di::{Dependencies, Dependency, Injectable, Injected, Injector};
pub use dispatch::{DispatchReport, EventDispatcher};
