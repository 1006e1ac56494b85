//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Shop Console payment watcher.
///
/// Polls a user's payment records and logs every status transition
/// until interrupted.
#[derive(Debug, Parser)]
#[command(name = "shop-console")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// User whose payment records are watched (required for run mode)
    #[arg(long)]
    pub user: Option<String>,

    /// Payment API base URL (required for run mode)
    #[arg(long = "payment-url")]
    pub payment_url: Option<String>,

    /// Pause between polling cycles in milliseconds
    #[arg(long = "interval-ms")]
    pub interval_ms: Option<u64>,

    /// Bearer token for Authorization headers
    #[arg(long)]
    pub bearer: Option<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for shop-console
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "shop-console.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the process environment.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
