//! Lists addons or describes one

use std::sync::Arc;

use linkme::distributed_slice;
use shirasu_application::addon::{ADDON_MODULES, Addon, AddonModuleEntry, AddonPool, rules};
use shirasu_application::di::{Injectable, names};
use shirasu_application::Context;

use crate::constants::HELP_AVAILABLE_PREFIX;

pub const NAME: &str = "help";

pub fn addon() -> Addon {
    Addon::new(NAME, "/help addon_name", "Prints usage description for certain addon.")
        .with_receiver(
            rules::command("help"),
            Injectable::new([names::CTX, names::POOL], |deps| async move {
                let ctx: Context = deps.get(names::CTX)?;
                let pool: Arc<AddonPool> = deps.get(names::POOL)?;
                ctx.send(help_text(&pool, &ctx.arg())).await?;
                Ok(())
            }),
        )
}

/// Reply for `/help <name>`; an empty name lists every addon
pub fn help_text(pool: &AddonPool, name: &str) -> String {
    if name.is_empty() {
        let names: Vec<&str> = pool.iter().map(|addon| addon.name()).collect();
        return format!("{HELP_AVAILABLE_PREFIX}{}", names.join(", "));
    }

    match pool.find_addon(name) {
        Some(addon) => format!(
            "Name: {}\nUsage: {}\nDescription: {}",
            addon.name(),
            addon.usage(),
            addon.description()
        ),
        None => format!("Addon {name} is not found."),
    }
}

#[distributed_slice(ADDON_MODULES)]
static HELP_MODULE: AddonModuleEntry = AddonModuleEntry {
    name: NAME,
    description: "Addon usage help",
    factory: || Ok(vec![addon()]),
};
