//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// PayMongo command-line client
///
/// Calls the PayMongo API and verifies signed webhook deliveries.
#[derive(Debug, Parser)]
#[command(name = "paymongo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Secret API key
    #[arg(long = "api-key", global = true)]
    pub api_key: Option<String>,

    /// API base URL
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for paymongo
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "paymongo.toml")]
        output: PathBuf,
    },

    /// Retrieve one resource, or list a service's resources when no id is given
    Get {
        /// Service name, e.g. `payments` or `payment_intents`
        service: String,

        /// Resource id
        id: Option<String>,

        /// Query parameter for list calls in 'key=value' form (repeatable)
        #[arg(long = "query", short = 'q', value_name = "K=V")]
        query: Vec<String>,
    },

    /// Verify a webhook delivery and print its event
    Verify {
        /// File holding the raw request body
        #[arg(long)]
        payload: PathBuf,

        /// Value of the Paymongo-Signature header
        #[arg(long)]
        signature: String,

        /// Webhook signing secret
        #[arg(long)]
        secret: Option<String>,

        /// Timestamp tolerance in seconds (0 disables the check)
        #[arg(long, allow_negative_numbers = true)]
        tolerance: Option<i64>,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
