//! Addons
//!
//! An [`Addon`] binds one [`Rule`] to one handler. The [`AddonPool`] holds
//! the loaded addons and which of them are disabled. Addon modules register
//! themselves in [`ADDON_MODULES`] and are loaded by name.
//!
//! ## Defining an addon
//!
//! ```
//! use linkme::distributed_slice;
//! use shirasu_application::addon::{ADDON_MODULES, Addon, AddonModuleEntry, rules};
//! use shirasu_application::di::{Injectable, names};
//! use shirasu_application::Context;
//! use shirasu_domain::Result;
//!
//! fn echo() -> Result<Vec<Addon>> {
//!     let handler = Injectable::new([names::CTX], |deps| async move {
//!         let ctx: Context = deps.get(names::CTX)?;
//!         ctx.send(ctx.arg()).await?;
//!         Ok(())
//!     });
//!     Ok(vec![Addon::new("echo", "/echo text", "Echo what you send.")
//!         .with_receiver(rules::command("echo"), handler)])
//! }
//!
//! #[distributed_slice(ADDON_MODULES)]
//! static ECHO: AddonModuleEntry = AddonModuleEntry {
//!     name: "doc_echo",
//!     description: "Echo",
//!     factory: echo,
//! };
//! ```

mod addon;
mod pool;
pub mod registry;
mod rule;
pub mod rules;

pub use addon::Addon;
pub use pool::AddonPool;
pub use registry::{ADDON_MODULES, AddonModuleEntry, find_addon_module, list_addon_modules};
pub use rule::Rule;
pub use rules::CommandArgs;
