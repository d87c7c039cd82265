//! Echoes the command argument back

use linkme::distributed_slice;
use shirasu_application::Context;
use shirasu_application::addon::{ADDON_MODULES, Addon, AddonModuleEntry, rules};
use shirasu_application::di::{Injectable, names};

pub const NAME: &str = "echo";

pub fn addon() -> Addon {
    Addon::new(NAME, "/echo text", "Echo what you send.").with_receiver(
        rules::command("echo"),
        Injectable::new([names::CTX], |deps| async move {
            let ctx: Context = deps.get(names::CTX)?;
            ctx.send(ctx.arg()).await?;
            Ok(())
        }),
    )
}

#[distributed_slice(ADDON_MODULES)]
static ECHO_MODULE: AddonModuleEntry = AddonModuleEntry {
    name: NAME,
    description: "Echo what you send",
    factory: || Ok(vec![addon()]),
};
