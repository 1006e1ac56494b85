//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, write_default_config};
use super::ConfigError;

#[test]
fn parses_full_config() {
    let config: TomlConfig = toml::from_str(
        r#"
        [watch]
        user = "USER_001"
        payment_url = "http://localhost:8084/payment/api"
        interval_ms = 250
        bearer = "secret"
        "#,
    )
    .unwrap();

    assert_eq!(config.watch.user.as_deref(), Some("USER_001"));
    assert_eq!(
        config.watch.payment_url.as_deref(),
        Some("http://localhost:8084/payment/api")
    );
    assert_eq!(config.watch.interval_ms, Some(250));
    assert_eq!(config.watch.bearer.as_deref(), Some("secret"));
}

#[test]
fn parses_partial_config() {
    let config: TomlConfig = toml::from_str(
        r#"
        [watch]
        user = "USER_001"
        "#,
    )
    .unwrap();

    assert_eq!(config.watch.user.as_deref(), Some("USER_001"));
    assert!(config.watch.payment_url.is_none());
    assert!(config.watch.interval_ms.is_none());
}

#[test]
fn parses_empty_config() {
    let config: TomlConfig = toml::from_str("").unwrap();
    assert!(config.watch.user.is_none());
}

#[test]
fn rejects_unknown_fields() {
    let result: Result<TomlConfig, _> = toml::from_str(
        r#"
        [watch]
        usr = "typo"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = TomlConfig::load(&dir.path().join("nope.toml"));

    assert!(matches!(result, Err(ConfigError::FileRead { .. })));
}

#[test]
fn load_reports_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "not [valid").unwrap();

    let result = TomlConfig::load(&path);
    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

#[test]
fn generated_template_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shop-console.toml");

    write_default_config(&path).unwrap();
    let config = TomlConfig::load(&path).unwrap();

    // Template values are commented out; the file parses to defaults.
    assert!(config.watch.user.is_none());
    assert!(config.watch.interval_ms.is_none());
}
