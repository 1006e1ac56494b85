//! Validated configuration after merging CLI and TOML sources.
//!
//! Contains the final configuration used by the application. All
//! validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// User whose payment records are watched (required)
    pub user: String,

    /// Payment API base URL (required)
    pub payment_url: Url,

    /// Pause between polling cycles
    pub interval: Duration,

    /// Bearer token for Authorization headers (optional)
    pub bearer: Option<String>,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ user: {}, payment_url: {}, interval: {}ms, bearer: {}, verbose: {} }}",
            self.user,
            self.payment_url,
            self.interval.as_millis(),
            if self.bearer.is_some() { "set" } else { "none" },
            self.verbose,
        )
    }
}

impl ValidatedConfig {
    /// Loads and validates configuration from CLI arguments, reading
    /// the TOML file when `--config` was given.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed,
    /// required fields are missing, the URL is invalid, or the interval
    /// is zero.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = match &cli.config {
            Some(path) => TomlConfig::load(&expand_tilde(path))?,
            None => TomlConfig::default(),
        };
        Self::from_raw(cli, &toml)
    }

    /// Creates a validated configuration from CLI arguments and a
    /// parsed TOML config. CLI arguments take precedence.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing, the URL is
    /// invalid, or the interval is zero.
    pub fn from_raw(cli: &Cli, toml: &TomlConfig) -> Result<Self, ConfigError> {
        let user = cli
            .user
            .clone()
            .or_else(|| toml.watch.user.clone())
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::MissingRequired {
                field: "user",
                hint: "Pass --user or set watch.user in the config file.",
            })?;

        let url_str = cli
            .payment_url
            .clone()
            .or_else(|| toml.watch.payment_url.clone())
            .ok_or(ConfigError::MissingRequired {
                field: "payment-url",
                hint: "Pass --payment-url or set watch.payment_url in the config file.",
            })?;
        let payment_url = Url::parse(&url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str,
            reason: e.to_string(),
        })?;

        let interval_ms = cli
            .interval_ms
            .or(toml.watch.interval_ms)
            .unwrap_or(defaults::POLL_INTERVAL_MS);
        if interval_ms == 0 {
            return Err(ConfigError::InvalidInterval);
        }

        Ok(Self {
            user,
            payment_url,
            interval: Duration::from_millis(interval_ms),
            bearer: cli.bearer.clone().or_else(|| toml.watch.bearer.clone()),
            verbose: cli.verbose,
        })
    }
}

/// Expands a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(stripped) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(stripped))
}
