//! Configuration types

mod app;
mod connection;
mod logging;

pub use app::AppConfig;
pub use connection::ConnectionConfig;
pub use logging::LoggingConfig;
