//! Enables and disables addons at runtime
//!
//! Superusers only: `/manage disable <name>` or `/manage enable <name>`.

use std::sync::Arc;

use linkme::distributed_slice;
use shirasu_application::addon::{ADDON_MODULES, Addon, AddonModuleEntry, AddonPool, rules};
use shirasu_application::di::{Injectable, names};
use shirasu_application::Context;
use shirasu_domain::error::Result;
use tracing::info;

use crate::constants::{MANAGE_DISABLE, MANAGE_ENABLE, MANAGE_INVALID_ARGS};

pub const NAME: &str = "manage";

pub fn addon() -> Addon {
    Addon::new(
        NAME,
        "/manage disable [name] or enable [name]",
        "Manage your addons.",
    )
    .with_receiver(
        rules::superuser() & rules::command("manage"),
        Injectable::new([names::CTX, names::POOL], |deps| async move {
            let ctx: Context = deps.get(names::CTX)?;
            let pool: Arc<AddonPool> = deps.get(names::POOL)?;
            handle(&ctx, &pool).await
        }),
    )
}

async fn handle(ctx: &Context, pool: &AddonPool) -> Result<()> {
    let args = ctx.args();
    let [mode, name] = args.as_slice() else {
        ctx.reject(MANAGE_INVALID_ARGS).await?;
        return Ok(());
    };

    if !pool.has_addon(name) {
        ctx.reject(format!("addon {name} does not exist.")).await?;
        return Ok(());
    }

    let disabled = match mode.as_str() {
        MANAGE_DISABLE => true,
        MANAGE_ENABLE => false,
        _ => {
            ctx.reject(format!(
                "Unknown mode: {mode}, expected disable or enable."
            ))
            .await?;
            return Ok(());
        }
    };

    pool.set_disabled(name, disabled)?;
    info!(addon = %name, disabled, by = ?ctx.event().user_id(), "Addon state changed");
    let verb = if disabled { "Disabled" } else { "Enabled" };
    ctx.send(format!("{verb} addon {name} successfully.")).await?;
    Ok(())
}

#[distributed_slice(ADDON_MODULES)]
static MANAGE_MODULE: AddonModuleEntry = AddonModuleEntry {
    name: NAME,
    description: "Enable or disable addons",
    factory: || Ok(vec![addon()]),
};
