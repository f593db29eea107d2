//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// API access section
    #[serde(default)]
    pub api: ApiSection,

    /// Webhook verification section
    #[serde(default)]
    pub webhook: WebhookSection,
}

/// API access configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    /// Secret API key (`sk_...`)
    pub key: Option<String>,

    /// API base URL
    pub base_url: Option<String>,

    /// API version path segment
    pub version: Option<String>,

    /// Connect timeout in seconds
    pub connect_timeout: Option<u64>,

    /// Total request timeout in seconds
    pub timeout: Option<u64>,
}

/// Webhook verification configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Webhook signing secret (`whsk_...`)
    pub secret: Option<String>,

    /// Timestamp tolerance in seconds; 0 or less disables the check
    pub tolerance: Option<i64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# PayMongo CLI Configuration File

[api]
# Secret API key (required for API calls)
# key = "sk_test_..."

# API base URL (default: https://api.paymongo.com)
# base_url = "https://api.paymongo.com"

# API version (default: v1)
# version = "v1"

# Connect and total request timeouts in seconds (default: 30)
# connect_timeout = 30
# timeout = 30

[webhook]
# Webhook signing secret (required for verify)
# secret = "whsk_..."

# Maximum age of a signed timestamp in seconds (default: 300)
# Set to 0 to disable the freshness check.
# tolerance = 300
"#
    .to_string()
}
