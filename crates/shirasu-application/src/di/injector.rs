//! The injector

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use futures::FutureExt;
use futures::future::{BoxFuture, try_join_all};
use shirasu_domain::error::{Error, Result};
use tracing::debug;

use super::{Dependencies, Dependency, Injectable};

/// Name-keyed registry of async providers
///
/// An injector may have a parent. Lookups fall through to the parent, and
/// providers registered on a child shadow the parent's without touching
/// it. The dispatcher relies on this to publish per-frame values.
#[derive(Default)]
pub struct Injector {
    providers: DashMap<String, Injectable<Dependency>>,
    parent: Option<Arc<Injector>>,
}

impl Injector {
    /// Create an empty root injector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a child injector
    pub fn scope(self: &Arc<Self>) -> Arc<Self> {
        Arc::new(Self {
            providers: DashMap::new(),
            parent: Some(Arc::clone(self)),
        })
    }

    /// Register a provider
    ///
    /// With `check_duplicate`, a name already registered on this injector
    /// fails with `DuplicateDependencyProvider`; otherwise the new provider
    /// replaces the old one for subsequent resolutions.
    pub fn provide<S: Into<String>>(
        &self,
        name: S,
        provider: Injectable<Dependency>,
        check_duplicate: bool,
    ) -> Result<()> {
        match self.providers.entry(name.into()) {
            Entry::Occupied(entry) if check_duplicate => {
                Err(Error::duplicate_provider(entry.key().clone()))
            }
            Entry::Occupied(mut entry) => {
                debug!(name = %entry.key(), "Replacing dependency provider");
                entry.insert(provider);
                Ok(())
            }
            Entry::Vacant(entry) => {
                entry.insert(provider);
                Ok(())
            }
        }
    }

    /// Register a constant value
    pub fn provide_value<S, T>(&self, name: S, value: T, check_duplicate: bool) -> Result<()>
    where
        S: Into<String>,
        T: Any + Send + Sync,
    {
        let value: Dependency = Arc::new(value);
        self.provide(
            name,
            Injectable::sync(Vec::<String>::new(), move |_| Ok(Arc::clone(&value))),
            check_duplicate,
        )
    }

    /// Whether a provider is reachable under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Bind a function to this injector
    pub fn inject<T: Send + 'static>(self: &Arc<Self>, target: Injectable<T>) -> Injected<T> {
        Injected {
            injector: Arc::clone(self),
            target,
        }
    }

    fn lookup(&self, name: &str) -> Option<Injectable<Dependency>> {
        match self.providers.get(name) {
            Some(provider) => Some(provider.value().clone()),
            None => self.parent.as_ref().and_then(|parent| parent.lookup(name)),
        }
    }

    fn resolve<T: Send + 'static>(
        self: &Arc<Self>,
        target: &Injectable<T>,
        chain: Arc<Vec<String>>,
    ) -> BoxFuture<'static, Result<T>> {
        let injector = Arc::clone(self);
        let target = target.clone();

        async move {
            let names = target.dependencies();

            let mut providers = Vec::with_capacity(names.len());
            let mut unknown = Vec::new();
            for name in names {
                match injector.lookup(name) {
                    Some(provider) => providers.push(provider),
                    None => unknown.push(name.clone()),
                }
            }
            if !unknown.is_empty() {
                return Err(Error::unknown_dependencies(unknown));
            }

            let circular: Vec<String> = names
                .iter()
                .filter(|name| chain.contains(name))
                .cloned()
                .collect();
            if !circular.is_empty() {
                return Err(Error::circular_dependencies(circular, chain.to_vec()));
            }

            let next: Arc<Vec<String>> =
                Arc::new(chain.iter().chain(names.iter()).cloned().collect());
            let values = try_join_all(
                providers
                    .iter()
                    .map(|provider| injector.resolve(provider, Arc::clone(&next))),
            )
            .await?;

            let resolved: HashMap<String, Dependency> =
                names.iter().cloned().zip(values).collect();
            target
                .invoke(Dependencies::new(resolved, Arc::clone(&injector)))
                .await
        }
        .boxed()
    }
}

impl fmt::Debug for Injector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.providers.iter().map(|e| e.key().clone()).collect();
        f.debug_struct("Injector")
            .field("providers", &names)
            .field("parent", &self.parent)
            .finish()
    }
}

/// A function bound to an injector, callable without arguments
#[derive(Debug, Clone)]
pub struct Injected<T> {
    injector: Arc<Injector>,
    target: Injectable<T>,
}

impl<T: Send + 'static> Injected<T> {
    /// Resolve every declared dependency and call the function
    ///
    /// Nothing of the function runs when resolution fails.
    pub async fn call(&self) -> Result<T> {
        self.injector
            .resolve(&self.target, Arc::new(Vec::new()))
            .await
    }
}
