//! Tests for configuration merging and validation.

use std::time::Duration;

use super::{Cli, ConfigError, TomlConfig, ValidatedConfig};
use clap::Parser;

fn cli(args: &[&str]) -> Cli {
    let mut full = vec!["shop-console"];
    full.extend_from_slice(args);
    Cli::try_parse_from(full).unwrap()
}

fn toml_config(content: &str) -> TomlConfig {
    toml::from_str(content).unwrap()
}

#[test]
fn cli_only_configuration() {
    let cli = cli(&[
        "--user",
        "USER_001",
        "--payment-url",
        "http://localhost:8084/payment/api",
    ]);

    let config = ValidatedConfig::from_raw(&cli, &TomlConfig::default()).unwrap();

    assert_eq!(config.user, "USER_001");
    assert_eq!(config.payment_url.as_str(), "http://localhost:8084/payment/api");
    assert_eq!(config.interval, Duration::from_millis(500));
    assert!(config.bearer.is_none());
}

#[test]
fn toml_fills_missing_cli_values() {
    let cli = cli(&[]);
    let toml = toml_config(
        r#"
        [watch]
        user = "USER_001"
        payment_url = "http://localhost:8084/payment/api"
        interval_ms = 1000
        bearer = "secret"
        "#,
    );

    let config = ValidatedConfig::from_raw(&cli, &toml).unwrap();

    assert_eq!(config.user, "USER_001");
    assert_eq!(config.interval, Duration::from_secs(1));
    assert_eq!(config.bearer.as_deref(), Some("secret"));
}

#[test]
fn cli_takes_precedence_over_toml() {
    let cli = cli(&[
        "--user",
        "USER_CLI",
        "--payment-url",
        "http://cli:8084/payment/api",
        "--interval-ms",
        "250",
    ]);
    let toml = toml_config(
        r#"
        [watch]
        user = "USER_TOML"
        payment_url = "http://toml:8084/payment/api"
        interval_ms = 9000
        "#,
    );

    let config = ValidatedConfig::from_raw(&cli, &toml).unwrap();

    assert_eq!(config.user, "USER_CLI");
    assert_eq!(config.payment_url.host_str(), Some("cli"));
    assert_eq!(config.interval, Duration::from_millis(250));
}

#[test]
fn missing_user_is_an_error() {
    let cli = cli(&["--payment-url", "http://localhost:8084/payment/api"]);

    let result = ValidatedConfig::from_raw(&cli, &TomlConfig::default());

    assert!(matches!(
        result,
        Err(ConfigError::MissingRequired { field: "user", .. })
    ));
}

#[test]
fn blank_user_is_treated_as_missing() {
    let cli = cli(&[
        "--user",
        "   ",
        "--payment-url",
        "http://localhost:8084/payment/api",
    ]);

    let result = ValidatedConfig::from_raw(&cli, &TomlConfig::default());

    assert!(matches!(
        result,
        Err(ConfigError::MissingRequired { field: "user", .. })
    ));
}

#[test]
fn missing_payment_url_is_an_error() {
    let cli = cli(&["--user", "USER_001"]);

    let result = ValidatedConfig::from_raw(&cli, &TomlConfig::default());

    assert!(matches!(
        result,
        Err(ConfigError::MissingRequired {
            field: "payment-url",
            ..
        })
    ));
}

#[test]
fn invalid_payment_url_is_an_error() {
    let cli = cli(&["--user", "USER_001", "--payment-url", "not a url"]);

    let result = ValidatedConfig::from_raw(&cli, &TomlConfig::default());

    assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
}

#[test]
fn zero_interval_is_an_error() {
    let cli = cli(&[
        "--user",
        "USER_001",
        "--payment-url",
        "http://localhost:8084/payment/api",
        "--interval-ms",
        "0",
    ]);

    let result = ValidatedConfig::from_raw(&cli, &TomlConfig::default());

    assert!(matches!(result, Err(ConfigError::InvalidInterval)));
}

#[test]
fn load_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shop-console.toml");
    std::fs::write(
        &path,
        r#"
        [watch]
        user = "USER_001"
        payment_url = "http://localhost:8084/payment/api"
        "#,
    )
    .unwrap();

    let cli = cli(&["--config", path.to_str().unwrap()]);
    let config = ValidatedConfig::load(&cli).unwrap();

    assert_eq!(config.user, "USER_001");
}

#[test]
fn load_without_config_file_uses_cli_only() {
    let cli = cli(&[
        "--user",
        "USER_001",
        "--payment-url",
        "http://localhost:8084/payment/api",
    ]);

    assert!(ValidatedConfig::load(&cli).is_ok());
}

#[test]
fn display_summarizes_without_leaking_bearer() {
    let cli = cli(&[
        "--user",
        "USER_001",
        "--payment-url",
        "http://localhost:8084/payment/api",
        "--bearer",
        "very-secret",
    ]);

    let config = ValidatedConfig::from_raw(&cli, &TomlConfig::default()).unwrap();
    let shown = config.to_string();

    assert!(shown.contains("USER_001"));
    assert!(shown.contains("bearer: set"));
    assert!(!shown.contains("very-secret"));
}
