//! Configuration Loader Tests

use shirasu_infrastructure::config::loader::{
    ConfigBuilder, ConfigLoader, ConfigSource, validate_app_config,
};
use shirasu_infrastructure::constants::{DEFAULT_LOG_LEVEL, DEFAULT_WS_URL};
use tempfile::TempDir;

#[test]
fn test_config_loader_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("absent.toml"))
        .load()
        .unwrap();

    assert_eq!(config.connection.url, DEFAULT_WS_URL);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert_eq!(config.bot.command_start, ["/"]);
}

#[test]
fn test_config_loader_reads_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("shirasu.toml");
    std::fs::write(
        &path,
        r#"
[connection]
url = "wss://bot.example:6700"
max_reconnect_attempts = 3

[bot]
command_start = ["!", "/"]
superusers = [1883]
modules = ["echo"]

[bot.addons.echo]
shout = true
"#,
    )
    .unwrap();

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();
    assert_eq!(config.connection.url, "wss://bot.example:6700");
    assert_eq!(config.connection.max_reconnect_attempts, Some(3));
    assert_eq!(config.connection.reconnect_delay_ms, 5_000);
    assert_eq!(config.bot.command_start, ["!", "/"]);
    assert!(config.bot.is_superuser(1883));
    assert_eq!(config.bot.modules, ["echo"]);
    assert_eq!(config.bot.addons["echo"]["shout"], serde_json::json!(true));
}

#[test]
fn test_config_loader_reads_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("shirasu.json");
    std::fs::write(
        &path,
        r#"{ "connection": { "url": "ws://10.0.0.1:1" }, "logging": { "level": "debug" } }"#,
    )
    .unwrap();

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();
    assert_eq!(config.connection.url, "ws://10.0.0.1:1");
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_config_validation_rejects_bad_values() {
    let bad_url = ConfigBuilder::new().with_url("http://localhost").build();
    assert!(validate_app_config(&bad_url).is_err());

    let mut no_prefix = ConfigBuilder::new().build();
    no_prefix.bot.command_start.clear();
    assert!(validate_app_config(&no_prefix).is_err());

    let mut zero_timeout = ConfigBuilder::new().build();
    zero_timeout.bot.call_timeout_ms = 0;
    assert!(validate_app_config(&zero_timeout).is_err());

    let mut bad_level = ConfigBuilder::new().build();
    bad_level.logging.level = "loud".to_string();
    assert!(validate_app_config(&bad_level).is_err());

    assert!(validate_app_config(&ConfigBuilder::new().build()).is_ok());
}

#[test]
fn test_invalid_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("shirasu.toml");
    std::fs::write(&path, "[connection]\nurl = \"tcp://nope\"\n").unwrap();

    assert!(ConfigLoader::new().with_config_path(&path).load().is_err());
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("saved.toml");

    let original = ConfigBuilder::new()
        .with_url("ws://127.0.0.1:9999")
        .with_modules(["echo", "square"])
        .build();
    ConfigLoader::new().save_to_file(&original, &path).unwrap();

    let loaded = ConfigLoader::new().with_config_path(&path).load().unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_load_reports_config_source() {
    let temp_dir = TempDir::new().unwrap();
    let absent = temp_dir.path().join("absent.toml");
    let (config, source) = ConfigLoader::new()
        .with_config_path(&absent)
        .load_with_source()
        .unwrap();
    assert_eq!(source, ConfigSource::Missing(absent));
    assert_eq!(config.connection.url, DEFAULT_WS_URL);

    let present = temp_dir.path().join("shirasu.toml");
    std::fs::write(&present, "[bot]\nsuperusers = [1]\n").unwrap();
    let (_, source) = ConfigLoader::new()
        .with_config_path(&present)
        .load_with_source()
        .unwrap();
    assert_eq!(source, ConfigSource::File(present));
}
