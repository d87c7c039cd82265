//! Runtime entry point
//!
//! `run` wires the layers together:
//!
//! 1. load [`AppConfig`] (defaults, file, `SHIRASU_*` environment);
//! 2. install logging;
//! 3. bootstrap the addon pool, injector and dispatcher;
//! 4. listen until Ctrl-C or a fatal error.

use std::path::Path;

use shirasu_domain::error::Result;
use shirasu_infrastructure::config::{AppConfig, ConfigLoader, ConfigSource};
use shirasu_infrastructure::{init_app, logging};
use tracing::{error, info};

use crate::connection::Connection;

/// Run the bot until shutdown
pub async fn run(config_path: Option<&Path>) -> Result<()> {
    let (config, source) = load_config(config_path)?;
    logging::init_logging(config.logging.clone())?;
    logging::log_config_loaded(&source);

    let context = init_app(config)?;
    info!(
        url = %context.config.connection.url,
        addons = context.pool.len(),
        "Starting shirasu"
    );

    let connection = Connection::new(
        context.config.connection.clone(),
        context.dispatcher.clone(),
    );
    let shutdown = connection.shutdown_token();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl-C received, shutting down");
                shutdown.cancel();
            }
            Err(e) => error!(error = %e, "Failed to listen for Ctrl-C"),
        }
    });

    connection.listen_forever().await
}

/// Load configuration from an optional path
pub fn load_config(config_path: Option<&Path>) -> Result<(AppConfig, ConfigSource)> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load_with_source()
}
