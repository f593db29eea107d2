//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the command-line application. Everything that can be checked without
//! knowing the subcommand is checked during construction; the API key and
//! webhook secret are only required by the commands that use them.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use super::cli::{Cli, Command};
use super::client::ClientConfig;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::{TomlConfig, default_config_template};

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// Values resolve as: explicit CLI argument, then TOML file, then built-in default.
pub struct ValidatedConfig {
    /// Secret API key, if provided
    pub api_key: Option<String>,

    /// API base URL
    pub base_url: Url,

    /// API version path segment
    pub api_version: String,

    /// Connect timeout
    pub connect_timeout: Duration,

    /// Total request timeout
    pub request_timeout: Duration,

    /// Webhook signing secret, if provided
    pub webhook_secret: Option<String>,

    /// Webhook timestamp tolerance in seconds
    pub webhook_tolerance: i64,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Debug for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url.as_str())
            .field("api_version", &self.api_version)
            .field("webhook_tolerance", &self.webhook_tolerance)
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ base_url: {}, version: {}, api_key: {}, timeouts: {}s/{}s, \
             webhook_secret: {}, webhook_tolerance: {}s }}",
            self.base_url,
            self.api_version,
            if self.api_key.is_some() { "set" } else { "unset" },
            self.connect_timeout.as_secs(),
            self.request_timeout.as_secs(),
            if self.webhook_secret.is_some() {
                "set"
            } else {
                "unset"
            },
            self.webhook_tolerance,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The base URL is invalid
    /// - A timeout is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let api = toml.map(|t| &t.api);
        let webhook = toml.map(|t| &t.webhook);

        let api_key = cli
            .api_key
            .clone()
            .or_else(|| api.and_then(|a| a.key.clone()));

        let base_url = Self::resolve_base_url(cli, toml)?;

        let api_version = api
            .and_then(|a| a.version.clone())
            .unwrap_or_else(|| defaults::API_VERSION.to_string());

        let connect_timeout = resolve_timeout(
            "connect_timeout",
            api.and_then(|a| a.connect_timeout),
            defaults::CONNECT_TIMEOUT_SECS,
        )?;
        let request_timeout = resolve_timeout(
            "timeout",
            api.and_then(|a| a.timeout),
            defaults::REQUEST_TIMEOUT_SECS,
        )?;

        // The verify subcommand carries its own overrides.
        let (cli_secret, cli_tolerance) = match &cli.command {
            Command::Verify {
                secret, tolerance, ..
            } => (secret.clone(), *tolerance),
            _ => (None, None),
        };

        let webhook_secret = cli_secret.or_else(|| webhook.and_then(|w| w.secret.clone()));

        let webhook_tolerance = cli_tolerance
            .or_else(|| webhook.and_then(|w| w.tolerance))
            .unwrap_or(defaults::WEBHOOK_TOLERANCE_SECS);

        Ok(Self {
            api_key,
            base_url,
            api_version,
            connect_timeout,
            request_timeout,
            webhook_secret,
            webhook_tolerance,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path. `init`
    /// never reads a file, since it writes the template.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = match &cli.config {
            Some(path) if !cli.is_init() => Some(TomlConfig::load(path)?),
            _ => None,
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Builds the library client configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if no API key was provided,
    /// or [`ConfigError::InvalidApiKey`] if it is unusable.
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        let key = self.api_key.as_deref().ok_or_else(|| {
            ConfigError::missing(field::API_KEY, "Use --api-key or set api.key in config file")
        })?;

        Ok(ClientConfig::new(key)?
            .with_base_url(self.base_url.clone())
            .with_api_version(self.api_version.clone())
            .with_timeouts(self.connect_timeout, self.request_timeout)
            .with_webhook_tolerance(self.webhook_tolerance))
    }

    /// Returns the webhook signing secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if no secret was provided.
    pub fn webhook_secret(&self) -> Result<&str, ConfigError> {
        self.webhook_secret.as_deref().ok_or_else(|| {
            ConfigError::missing(
                field::WEBHOOK_SECRET,
                "Use --secret or set webhook.secret in config file",
            )
        })
    }

    fn resolve_base_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        let url_str = cli
            .base_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.base_url.as_deref()))
            .unwrap_or(defaults::BASE_URL);

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: "cannot be used as a base URL".to_string(),
            });
        }

        Ok(url)
    }
}

fn resolve_timeout(
    name: &'static str,
    configured: Option<u64>,
    default_secs: u64,
) -> Result<Duration, ConfigError> {
    let seconds = configured.unwrap_or(default_secs);

    if seconds == 0 {
        return Err(ConfigError::InvalidDuration {
            field: name,
            reason: "must be greater than 0".to_string(),
        });
    }

    Ok(Duration::from_secs(seconds))
}

/// Writes the default configuration template to the given path.
///
/// # Errors
///
/// Returns [`ConfigError::FileWrite`] if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, default_config_template()).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
