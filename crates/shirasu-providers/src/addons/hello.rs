//! Replies `world` to anything starting with `hello`

use linkme::distributed_slice;
use shirasu_application::Context;
use shirasu_application::addon::{ADDON_MODULES, Addon, AddonModuleEntry, rules};
use shirasu_application::di::{Injectable, names};
use shirasu_domain::error::Result;

use crate::constants::HELLO_REPLY;

pub const NAME: &str = "hello";

pub fn addon() -> Result<Addon> {
    let handler = Injectable::new([names::CTX], |deps| async move {
        let ctx: Context = deps.get(names::CTX)?;
        ctx.send(HELLO_REPLY).await?;
        Ok(())
    });
    Ok(
        Addon::new(NAME, "hello", "Sends world when received hello.")
            .with_receiver(rules::regex_str("^hello")?, handler),
    )
}

#[distributed_slice(ADDON_MODULES)]
static HELLO_MODULE: AddonModuleEntry = AddonModuleEntry {
    name: NAME,
    description: "Replies world to hello",
    factory: || Ok(vec![addon()?]),
};
