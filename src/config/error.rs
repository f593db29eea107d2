//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Why configuration could not be loaded, merged or written.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file named by `--config` could not be read.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// File that was requested
        path: PathBuf,
        /// I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML, or has unknown keys or wrong types.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// `init` could not write the template.
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Destination of the template
        path: PathBuf,
        /// I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A value the command needs was given neither on the CLI nor in the file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// One of the [`field`] constants
        field: &'static str,
        /// Where the value can be supplied
        hint: &'static str,
    },

    /// The API key cannot be used in an Authorization header.
    #[error("Invalid API key: {reason}")]
    InvalidApiKey {
        /// Reason for invalidity
        reason: String,
    },

    /// The base URL does not parse or cannot carry path segments.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// URL as given
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A timeout of zero seconds.
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// TOML key of the timeout
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

/// Field names reported by [`ConfigError::MissingRequired`].
pub mod field {
    /// The API secret key field.
    pub const API_KEY: &str = "api_key";
    /// The webhook secret field.
    pub const WEBHOOK_SECRET: &str = "webhook_secret";
}

impl ConfigError {
    /// Shorthand for [`ConfigError::MissingRequired`].
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
