//! # Infrastructure Layer
//!
//! Technical concerns that support the application and domain layers.
//!
//! ## Module Categories
//!
//! ### Configuration & Bootstrap
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (defaults, file, environment) |
//! | [`di`] | Composition root building the injector, pool and dispatcher |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Runtime Support
//! | Module | Description |
//! |--------|-------------|
//! | [`correlation`] | Pending call table keyed by echo id |
//! | [`retry`] | Fixed-delay reconnect loop |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context helpers for foreign errors |

pub mod config;
pub mod constants;
pub mod correlation;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod retry;

pub use config::{AppConfig, ConfigLoader, ConnectionConfig, LoggingConfig};
pub use correlation::CorrelationTable;
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
pub use retry::{RetryPolicy, retry_with_policy};
