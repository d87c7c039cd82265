//! # shirasu - Built-in Addons
//!
//! Addon modules shipped with shirasu. Each module registers itself in
//! [`ADDON_MODULES`](shirasu_application::addon::ADDON_MODULES) at link time,
//! so `bot.modules = ["echo"]` finds it by name.
//!
//! | Module | Feature | Trigger | Reply |
//! |--------|---------|---------|-------|
//! | `hello` | `hello` | text starting with `hello` | `world` |
//! | `echo` | `echo` | `/echo text` | `text` |
//! | `square` | `square` | `/square number` | the square of `number` |
//! | `help` | `help` | `/help [addon]` | addon list or one addon's usage |
//! | `manage` | `manage` | `/manage enable\|disable name` (superusers) | toggles an addon |
//! | `reject_tome` | `reject-tome` | private messages and mentions | a rejection |
//!
//! Binaries must reference this crate (`extern crate shirasu_providers;`)
//! for the registrations to be linked in.

pub use shirasu_domain::error::{Error, Result};

/// Reply texts
pub mod constants;

/// Addon module implementations
pub mod addons;
