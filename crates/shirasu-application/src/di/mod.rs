//! Dependency injection
//!
//! Providers are registered under a name and produce a type-erased
//! [`Dependency`]. Consumers declare the names they need up front as an
//! [`Injectable`]; the [`Injector`] resolves every declared name
//! concurrently and hands the values over as [`Dependencies`].
//!
//! ## Resolution
//!
//! | Step | Failure |
//! |------|---------|
//! | every declared name has a provider | `UnknownDependency` listing all missing names |
//! | no declared name is already in the resolution chain | `CircularDependency` |
//! | providers resolved concurrently with chain ∪ declared names | first provider error |
//! | body invoked with the resolved values | body error |
//!
//! Siblings of a dependency count as cycle partners: if `a` and `b` are
//! declared together, the provider of `a` may not depend on `b`.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use shirasu_application::di::{Injectable, Injector};
//!
//! # futures::executor::block_on(async {
//! let injector = Arc::new(Injector::new());
//! injector.provide_value("answer", 42_i64, true).unwrap();
//!
//! let doubled = injector
//!     .inject(Injectable::sync(["answer"], |deps| Ok(deps.get::<i64>("answer")? * 2)))
//!     .call()
//!     .await
//!     .unwrap();
//! assert_eq!(doubled, 84);
//! # });
//! ```

mod injectable;
mod injector;
pub mod names;

pub use injectable::{Dependencies, Dependency, Injectable};
pub use injector::{Injected, Injector};
