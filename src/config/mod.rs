//! Configuration layer for the shop-console binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority
//! (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file**
//! 3. **Built-in defaults** (`interval_ms = 500`)
//!
//! For required fields without defaults (`user`, `payment_url`), CLI
//! takes precedence over TOML.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use toml::{TomlConfig, write_default_config};
pub use validated::ValidatedConfig;
