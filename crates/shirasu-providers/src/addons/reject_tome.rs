//! Rejects every message addressed to the bot

use linkme::distributed_slice;
use shirasu_application::Context;
use shirasu_application::addon::{ADDON_MODULES, Addon, AddonModuleEntry, rules};
use shirasu_application::di::{Injectable, names};

use crate::constants::REJECT_TOME_REPLY;

pub const NAME: &str = "reject_tome";

pub fn addon() -> Addon {
    Addon::new(
        NAME,
        "At the bot or send private messages to the bot.",
        "Rejects if current event is to the bot.",
    )
    .with_receiver(
        rules::tome(),
        Injectable::new([names::CTX], |deps| async move {
            let ctx: Context = deps.get(names::CTX)?;
            ctx.reject(REJECT_TOME_REPLY).await?;
            Ok(())
        }),
    )
}

#[distributed_slice(ADDON_MODULES)]
static REJECT_TOME_MODULE: AddonModuleEntry = AddonModuleEntry {
    name: NAME,
    description: "Rejects private messages and mentions",
    factory: || Ok(vec![addon()]),
};
