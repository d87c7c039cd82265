//! Addon module registry
//!
//! Addon modules register themselves at link time and are loaded by name.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                  Addon Module Registration                   │
//! ├──────────────────────────────────────────────────────────────┤
//! │  1. Module defines:  #[linkme::distributed_slice(ADDON_MODULES)]
//! │                      static ECHO: AddonModuleEntry = ...     │
//! │                              ↓                               │
//! │  2. Config selects:  modules = ["echo", "square"]            │
//! │                              ↓                               │
//! │  3. Pool loads:      AddonPool::load_module("echo")          │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The binary must link the crate holding the modules (`extern crate`)
//! for its entries to be present.

use shirasu_domain::error::Result;

use super::Addon;

/// Registry entry for one addon module
pub struct AddonModuleEntry {
    /// Module identifier used by `load_module`
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Builds the module's addons
    ///
    /// A failing factory is reported as a load failure of the module.
    pub factory: fn() -> Result<Vec<Addon>>,
}

// Auto-collection via linkme distributed slices - modules submit entries at compile time
#[linkme::distributed_slice]
pub static ADDON_MODULES: [AddonModuleEntry] = [..];

/// Find a registered module by identifier
pub fn find_addon_module(name: &str) -> Option<&'static AddonModuleEntry> {
    ADDON_MODULES.iter().find(|entry| entry.name == name)
}

/// List all registered modules
///
/// Returns `(name, description)` pairs sorted by name.
pub fn list_addon_modules() -> Vec<(&'static str, &'static str)> {
    let mut modules: Vec<_> = ADDON_MODULES
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect();
    modules.sort_unstable();
    modules
}
