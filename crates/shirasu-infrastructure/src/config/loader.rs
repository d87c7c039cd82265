//! Configuration loader
//!
//! Sources are merged in order, later ones overriding earlier ones:
//!
//! 1. defaults from `AppConfig::default()`
//! 2. the configuration file (TOML, or JSON when the path ends in `.json`)
//! 3. environment variables such as `SHIRASU_CONNECTION__URL`

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml};
use shirasu_domain::error::{Error, Result};

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    WS_SCHEMES,
};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file
    File(PathBuf),
    /// The requested file does not exist; defaults were used
    Missing(PathBuf),
    /// No file was requested or found
    Defaults,
}

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    pub fn load(&self) -> Result<AppConfig> {
        self.load_with_source().map(|(config, _)| config)
    }

    /// Load configuration and report which file it came from
    ///
    /// Nothing is logged here; the caller reports the [`ConfigSource`] once
    /// logging is installed.
    pub fn load_with_source(&self) -> Result<(AppConfig, ConfigSource)> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        let source = self.source();
        if let ConfigSource::File(path) = &source {
            figment = merge_file(figment, path);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;
        Ok((app_config, source))
    }

    /// Which file, if any, `load` would read
    pub fn source(&self) -> ConfigSource {
        match &self.config_path {
            Some(path) if path.exists() => ConfigSource::File(path.clone()),
            Some(path) => ConfigSource::Missing(path.clone()),
            None => Self::find_default_config_path()
                .map_or(ConfigSource::Defaults, ConfigSource::File),
        }
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config)
            .config_context("Failed to serialize config to TOML")?;
        std::fs::write(path.as_ref(), toml_string)?;
        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn merge_file(figment: Figment, path: &Path) -> Figment {
    if path.extension().is_some_and(|ext| ext == "json") {
        figment.merge(Json::file(path))
    } else {
        figment.merge(Toml::file(path))
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_connection_config(config)?;
    validate_bot_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_connection_config(config: &AppConfig) -> Result<()> {
    let url = &config.connection.url;
    if !WS_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        return Err(Error::configuration(format!(
            "Connection URL must start with ws:// or wss://, got {url}"
        )));
    }
    Ok(())
}

fn validate_bot_config(config: &AppConfig) -> Result<()> {
    if config.bot.command_start.is_empty() {
        return Err(Error::configuration("Command prefix set cannot be empty"));
    }
    if config.bot.call_timeout_ms == 0 {
        return Err(Error::configuration("Call timeout cannot be 0"));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the connection endpoint
    pub fn with_url<S: Into<String>>(mut self, url: S) -> Self {
        self.config.connection.url = url.into();
        self
    }

    /// Set the bot settings
    pub fn with_bot(mut self, bot: shirasu_domain::BotSettings) -> Self {
        self.config.bot = bot;
        self
    }

    /// Set the addon modules to load
    pub fn with_modules<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.bot.modules = modules.into_iter().map(Into::into).collect();
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: crate::config::LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}
