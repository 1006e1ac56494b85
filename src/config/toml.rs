//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration that can be
/// merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Payment watching configuration section
    #[serde(default)]
    pub watch: WatchSection,
}

/// Payment watching configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WatchSection {
    /// User whose payment records are watched
    pub user: Option<String>,

    /// Payment API base URL
    pub payment_url: Option<String>,

    /// Pause between polling cycles in milliseconds
    pub interval_ms: Option<u64>,

    /// Bearer token for Authorization headers
    pub bearer: Option<String>,
}

impl TomlConfig {
    /// Loads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileRead`] when the file cannot be read
    /// and [`ConfigError::TomlParse`] when it is not valid TOML or
    /// contains unknown fields.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }
}

/// Template written by the `init` subcommand.
const CONFIG_TEMPLATE: &str = r#"# shop-console configuration

[watch]
# User whose payment records are watched.
# user = "USER_001"

# Payment API base URL.
# payment_url = "http://localhost:8084/payment/api"

# Pause between polling cycles in milliseconds (default: 500).
# interval_ms = 500

# Bearer token sent as Authorization header.
# bearer = ""
"#;

/// Writes the default configuration template to the given path.
///
/// # Errors
///
/// Returns [`ConfigError::FileWrite`] when the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, CONFIG_TEMPLATE).map_err(|source| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}
