//! Addon pool

use std::collections::HashSet;
use std::sync::Arc;

use dashmap::DashSet;
use shirasu_domain::error::{Error, Result};
use tracing::info;

use super::Addon;
use super::registry::find_addon_module;

/// The loaded addons and their enabled state
///
/// Addons keep insertion order. The disabled set only ever holds names of
/// loaded addons, and can be changed through a shared reference while
/// events are dispatched.
#[derive(Debug, Default)]
pub struct AddonPool {
    addons: Vec<Arc<Addon>>,
    disabled: DashSet<String>,
}

impl AddonPool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from registered modules
    pub fn from_modules<I, S>(modules: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pool = Self::new();
        for module in modules {
            pool.load_module(module.as_ref())?;
        }
        Ok(pool)
    }

    /// Load one addon
    pub fn load(&mut self, addon: Addon) -> Result<&mut Self> {
        if self.has_addon(addon.name()) {
            return Err(Error::duplicate_addon(addon.name()));
        }
        info!(addon = %addon.name(), "Loaded addon");
        self.addons.push(Arc::new(addon));
        Ok(self)
    }

    /// Load every addon of a registered module
    ///
    /// All addons are checked before any is inserted, so a failed load
    /// leaves the pool unchanged.
    pub fn load_module(&mut self, module: &str) -> Result<&mut Self> {
        let entry = find_addon_module(module)
            .ok_or_else(|| Error::load_addon(module, "module is not registered"))?;

        let addons =
            (entry.factory)().map_err(|e| Error::load_addon(module, e.to_string()))?;
        if addons.is_empty() {
            return Err(Error::load_addon(module, "module has no addons"));
        }

        let mut seen = HashSet::new();
        for addon in &addons {
            if self.has_addon(addon.name()) || !seen.insert(addon.name()) {
                return Err(Error::duplicate_addon(addon.name()));
            }
        }

        for addon in addons {
            self.load(addon)?;
        }
        Ok(self)
    }

    /// Look up an addon, failing when absent
    pub fn get_addon(&self, name: &str) -> Result<&Arc<Addon>> {
        self.find_addon(name)
            .ok_or_else(|| Error::no_such_addon(name))
    }

    /// Look up an addon
    pub fn find_addon(&self, name: &str) -> Option<&Arc<Addon>> {
        self.addons.iter().find(|addon| addon.name() == name)
    }

    /// Whether an addon is loaded
    pub fn has_addon(&self, name: &str) -> bool {
        self.find_addon(name).is_some()
    }

    /// Enable or disable an addon
    pub fn set_disabled(&self, name: &str, disabled: bool) -> Result<()> {
        self.get_addon(name)?;
        if disabled {
            self.disabled.insert(name.to_string());
        } else {
            self.disabled.remove(name);
        }
        Ok(())
    }

    /// Whether an addon is disabled
    pub fn get_disabled(&self, name: &str) -> Result<bool> {
        self.get_addon(name)?;
        Ok(self.disabled.contains(name))
    }

    /// Enabled addons in insertion order
    ///
    /// The iterator is lazy; call again for a fresh pass.
    pub fn get_enabled_addons(&self) -> impl Iterator<Item = &Arc<Addon>> + '_ {
        self.addons
            .iter()
            .filter(|addon| !self.disabled.contains(addon.name()))
    }

    /// All addons in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Addon>> + '_ {
        self.addons.iter()
    }

    /// Number of loaded addons
    pub fn len(&self) -> usize {
        self.addons.len()
    }

    /// Whether no addon is loaded
    pub fn is_empty(&self) -> bool {
        self.addons.is_empty()
    }
}

impl<'a> IntoIterator for &'a AddonPool {
    type Item = &'a Arc<Addon>;
    type IntoIter = std::slice::Iter<'a, Arc<Addon>>;

    fn into_iter(self) -> Self::IntoIter {
        self.addons.iter()
    }
}
