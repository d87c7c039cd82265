//! Addon modules
//!
//! Every submodule exposes `addon()` and registers a module entry of the
//! same name.

#[cfg(feature = "echo")]
pub mod echo;
#[cfg(feature = "hello")]
pub mod hello;
#[cfg(feature = "help")]
pub mod help;
#[cfg(feature = "manage")]
pub mod manage;
#[cfg(feature = "reject-tome")]
pub mod reject_tome;
#[cfg(feature = "square")]
pub mod square;
