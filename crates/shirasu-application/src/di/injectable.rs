//! Injectable functions and resolved dependency sets

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use shirasu_domain::error::{Error, Result};

use super::Injector;

/// A resolved, type-erased dependency value
pub type Dependency = Arc<dyn Any + Send + Sync>;

type Body<T> = dyn Fn(Dependencies) -> BoxFuture<'static, Result<T>> + Send + Sync;

/// A function together with the names of the dependencies it needs
///
/// Cloning is cheap; the body is shared.
pub struct Injectable<T> {
    deps: Arc<[String]>,
    body: Arc<Body<T>>,
}

impl<T> Clone for Injectable<T> {
    fn clone(&self) -> Self {
        Self {
            deps: Arc::clone(&self.deps),
            body: Arc::clone(&self.body),
        }
    }
}

impl<T> fmt::Debug for Injectable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Injectable")
            .field("deps", &self.deps)
            .finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Injectable<T> {
    /// Wrap an async body
    pub fn new<I, S, F, Fut>(deps: I, body: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(Dependencies) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        Self {
            deps: deps.into_iter().map(Into::into).collect(),
            body: Arc::new(move |resolved| body(resolved).boxed()),
        }
    }

    /// Wrap a synchronous body
    pub fn sync<I, S, F>(deps: I, body: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(Dependencies) -> Result<T> + Send + Sync + 'static,
    {
        let body = Arc::new(body);
        Self::new(deps, move |resolved| {
            let body = Arc::clone(&body);
            async move { body(resolved) }
        })
    }

    /// Declared dependency names, in order
    pub fn dependencies(&self) -> &[String] {
        &self.deps
    }

    pub(crate) fn invoke(&self, resolved: Dependencies) -> BoxFuture<'static, Result<T>> {
        (self.body)(resolved)
    }
}

impl<T: Any + Send + Sync> Injectable<T> {
    /// Erase the output type so the function can serve as a provider
    pub fn erased(self) -> Injectable<Dependency> {
        let body = self.body;
        Injectable {
            deps: self.deps,
            body: Arc::new(move |resolved| {
                body(resolved)
                    .map(|value| value.map(|v| Arc::new(v) as Dependency))
                    .boxed()
            }),
        }
    }
}

/// The resolved values of one injectable's declared dependencies
#[derive(Clone)]
pub struct Dependencies {
    values: HashMap<String, Dependency>,
    injector: Arc<Injector>,
}

impl Dependencies {
    pub(crate) fn new(values: HashMap<String, Dependency>, injector: Arc<Injector>) -> Self {
        Self { values, injector }
    }

    /// Clone a dependency out as `T`
    pub fn get<T: Any + Clone>(&self, name: &str) -> Result<T> {
        self.get_ref::<T>(name).cloned()
    }

    /// Borrow a dependency as `T`
    pub fn get_ref<T: Any>(&self, name: &str) -> Result<&T> {
        let value = self
            .values
            .get(name)
            .ok_or_else(|| Error::unknown_dependencies([name]))?;
        (**value)
            .downcast_ref::<T>()
            .ok_or_else(|| Error::DependencyType {
                name: name.to_string(),
                expected: type_name::<T>(),
            })
    }

    /// The raw value of a dependency
    pub fn raw(&self, name: &str) -> Option<&Dependency> {
        self.values.get(name)
    }

    /// The injector that resolved these values
    ///
    /// Composite functions use it to resolve further injectables in the
    /// same scope.
    pub fn injector(&self) -> &Arc<Injector> {
        &self.injector
    }
}

impl fmt::Debug for Dependencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dependencies")
            .field("names", &self.values.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
