//! Reconnect loop
//!
//! [`retry_with_policy`] reruns an operation after a fixed delay as long as
//! it fails with a reconnectable error (see
//! `Error::reconnect_reason`). Any other error ends the loop and is
//! returned. The shutdown token stops the loop cleanly at any point.

use std::future::Future;
use std::time::Duration;

use shirasu_domain::error::Result;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::config::ConnectionConfig;

/// When and how often to retry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Fixed delay between attempts
    pub delay: Duration,
    /// Total attempts before giving up; `None` retries forever
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    /// Retry forever with a fixed delay
    pub fn fixed(delay: Duration) -> Self {
        Self {
            delay,
            max_attempts: None,
        }
    }

    /// Limit the total number of attempts
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }
}

impl From<&ConnectionConfig> for RetryPolicy {
    fn from(config: &ConnectionConfig) -> Self {
        Self {
            delay: config.reconnect_delay(),
            max_attempts: config.max_reconnect_attempts,
        }
    }
}

/// Run `operation` until it succeeds, fails fatally or shutdown is requested
pub async fn retry_with_policy<F, Fut>(
    policy: &RetryPolicy,
    shutdown: &CancellationToken,
    mut operation: F,
) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let mut attempts: u32 = 0;

    loop {
        let outcome = tokio::select! {
            () = shutdown.cancelled() => {
                info!("Shutdown requested, leaving retry loop");
                return Ok(());
            }
            outcome = operation() => outcome,
        };

        let error = match outcome {
            Ok(()) => return Ok(()),
            Err(error) => error,
        };
        let Some(reason) = error.reconnect_reason() else {
            return Err(error);
        };

        attempts = attempts.saturating_add(1);
        if policy.max_attempts.is_some_and(|max| attempts >= max) {
            warn!(reason, attempts, "Giving up after reaching the attempt limit");
            return Err(error);
        }

        warn!(reason, delay = ?policy.delay, "{reason}, retrying in {:?}", policy.delay);
        tokio::select! {
            () = shutdown.cancelled() => return Ok(()),
            () = tokio::time::sleep(policy.delay) => {}
        }
    }
}
