//! A single addon

use std::fmt;
use std::sync::Arc;

use shirasu_domain::error::Result;
use tracing::{info, warn};

use super::Rule;
use crate::di::{Injectable, Injector};

struct Receiver {
    rule: Rule,
    handler: Injectable<()>,
}

/// A named unit combining one rule with one handler
pub struct Addon {
    name: String,
    usage: String,
    description: String,
    receiver: Option<Receiver>,
}

impl Addon {
    /// Create an addon without a receiver
    pub fn new<N, U, D>(name: N, usage: U, description: D) -> Self
    where
        N: Into<String>,
        U: Into<String>,
        D: Into<String>,
    {
        Self {
            name: name.into(),
            usage: usage.into(),
            description: description.into(),
            receiver: None,
        }
    }

    /// Addon name, unique within a pool
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How to use the addon
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// What the addon does
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether a rule and handler are registered
    pub fn has_receiver(&self) -> bool {
        self.receiver.is_some()
    }

    /// Register the rule and handler
    ///
    /// A previously registered pair is replaced with a warning.
    pub fn receive(&mut self, rule: Rule, handler: Injectable<()>) -> &mut Self {
        if self.receiver.is_some() {
            warn!(
                addon = %self.name,
                "Duplicate rule and receiver, the old one will be overwritten"
            );
        }
        self.receiver = Some(Receiver { rule, handler });
        self
    }

    /// Builder form of [`Addon::receive`]
    #[must_use]
    pub fn with_receiver(mut self, rule: Rule, handler: Injectable<()>) -> Self {
        self.receive(rule, handler);
        self
    }

    /// Evaluate the rule and run the handler on a match
    ///
    /// Returns whether the handler ran. Without a receiver this only warns.
    pub async fn do_receive(&self, injector: &Arc<Injector>) -> Result<bool> {
        let Some(receiver) = &self.receiver else {
            warn!(
                addon = %self.name,
                "Attempted to receive while receiver and rule are absent"
            );
            return Ok(false);
        };

        if !receiver.rule.matches(injector).await? {
            return Ok(false);
        }

        info!(addon = %self.name, "Matched addon");
        injector.inject(receiver.handler.clone()).call().await?;
        Ok(true)
    }
}

impl fmt::Debug for Addon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Addon")
            .field("name", &self.name)
            .field("usage", &self.usage)
            .field("description", &self.description)
            .field("has_receiver", &self.has_receiver())
            .finish()
    }
}
