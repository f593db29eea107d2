//! Configuration layer.
//!
//! This module provides:
//! - Library client settings ([`ClientConfig`])
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The API key and webhook secret have no defaults. They are only required
//! by the subcommands that use them (`get` and `verify`).
//!
//! # TOML-Only Options
//!
//! The API version and the connect/total timeouts can only be set in the
//! config file.
//!
//! # Webhook Tolerance
//!
//! A tolerance of 0 or less disables the webhook freshness check entirely.
//! This is an explicit opt-out for replaying recorded deliveries.

mod cli;
mod client;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command};
pub use client::ClientConfig;
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
