//! Application bootstrap
//!
//! Turns a loaded [`AppConfig`] into the objects the connection core needs.
//!
//! ```text
//! AppConfig ─▶ modules ─▶ AddonPool ─┐
//!          └─▶ BotSettings ──────────┼─▶ EventDispatcher (root Injector)
//! ```
//!
//! An empty `bot.modules` list loads every registered addon module.

use std::sync::Arc;

use shirasu_application::addon::list_addon_modules;
use shirasu_application::{AddonPool, EventDispatcher, Injector};
use shirasu_domain::BotSettings;
use shirasu_domain::error::Result;
use tracing::info;

use crate::config::AppConfig;

/// Everything built at startup
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Bot settings shared with rules and addons
    pub settings: Arc<BotSettings>,
    /// Root injector
    pub injector: Arc<Injector>,
    /// Loaded addons
    pub pool: Arc<AddonPool>,
    /// Event fan-out
    pub dispatcher: EventDispatcher,
}

/// Build the application context
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let modules: Vec<String> = if config.bot.modules.is_empty() {
        list_addon_modules()
            .into_iter()
            .map(|(name, _)| name.to_string())
            .collect()
    } else {
        config.bot.modules.clone()
    };

    let pool = AddonPool::from_modules(&modules)?;
    for name in &config.bot.disabled {
        pool.set_disabled(name, true)?;
    }
    info!(
        modules = modules.len(),
        addons = pool.len(),
        disabled = config.bot.disabled.len(),
        "Addon pool ready"
    );

    let settings = Arc::new(config.bot.clone());
    let pool = Arc::new(pool);
    let injector = Arc::new(Injector::new());
    let dispatcher = EventDispatcher::new(
        Arc::clone(&injector),
        Arc::clone(&pool),
        Arc::clone(&settings),
    )?;

    Ok(AppContext {
        config: Arc::new(config),
        settings,
        injector,
        pool,
        dispatcher,
    })
}
