//! Event dispatch
//!
//! One call to [`EventDispatcher::dispatch`] handles one inbound event:
//!
//! 1. heartbeats are dropped;
//! 2. a child scope of the root injector publishes `event`, `args`,
//!    `client` and `ctx` for this frame only;
//! 3. every enabled addon runs `do_receive` concurrently in that scope.
//!
//! A failing or panicking addon is logged and counted; it never cancels its
//! siblings.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::join_all;
use shirasu_domain::error::Result;
use shirasu_domain::events::Event;
use shirasu_domain::ports::Client;
use shirasu_domain::value_objects::BotSettings;
use tracing::{debug, error};

use crate::addon::{AddonPool, CommandArgs};
use crate::context::Context;
use crate::di::{Injector, names};

/// Outcome of dispatching one event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Addons whose handler ran
    pub matched: Vec<String>,
    /// Addons whose rule or handler failed or panicked
    pub failed: Vec<String>,
}

/// Fans events out to the enabled addons of a pool
#[derive(Debug, Clone)]
pub struct EventDispatcher {
    injector: Arc<Injector>,
    pool: Arc<AddonPool>,
    config: Arc<BotSettings>,
}

impl EventDispatcher {
    /// Create a dispatcher
    ///
    /// Registers `pool` and `config` on the root injector, replacing any
    /// earlier registration.
    pub fn new(
        injector: Arc<Injector>,
        pool: Arc<AddonPool>,
        config: Arc<BotSettings>,
    ) -> Result<Self> {
        injector.provide_value(names::POOL, Arc::clone(&pool), false)?;
        injector.provide_value(names::CONFIG, Arc::clone(&config), false)?;
        Ok(Self {
            injector,
            pool,
            config,
        })
    }

    pub fn injector(&self) -> &Arc<Injector> {
        &self.injector
    }

    pub fn pool(&self) -> &Arc<AddonPool> {
        &self.pool
    }

    pub fn config(&self) -> &Arc<BotSettings> {
        &self.config
    }

    /// Dispatch one event to every enabled addon
    pub async fn dispatch(&self, event: Event, client: Arc<dyn Client>) -> Result<DispatchReport> {
        if event.is_heartbeat() {
            debug!("Dropping heartbeat");
            return Ok(DispatchReport::default());
        }

        let event = Arc::new(event);
        let args = Arc::new(CommandArgs::default());
        let ctx = Context::new(
            Arc::clone(&client),
            Arc::clone(&event),
            Arc::clone(&args),
            Arc::clone(&self.config),
        );

        let scope = self.injector.scope();
        scope.provide_value(names::EVENT, event, true)?;
        scope.provide_value(names::ARGS, args, true)?;
        scope.provide_value(names::CLIENT, client, true)?;
        scope.provide_value(names::CTX, ctx, true)?;

        let outcomes = join_all(self.pool.get_enabled_addons().map(|addon| {
            let scope = &scope;
            async move {
                let outcome = AssertUnwindSafe(addon.do_receive(scope))
                    .catch_unwind()
                    .await;
                (addon.name(), outcome)
            }
        }))
        .await;

        let mut report = DispatchReport::default();
        for (name, outcome) in outcomes {
            match outcome {
                Ok(Ok(true)) => report.matched.push(name.to_string()),
                Ok(Ok(false)) => {}
                Ok(Err(e)) => {
                    error!(addon = %name, error = %e, "Addon failed");
                    report.failed.push(name.to_string());
                }
                Err(panic) => {
                    error!(addon = %name, panic = panic_message(&*panic), "Addon panicked");
                    report.failed.push(name.to_string());
                }
            }
        }
        Ok(report)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
