//! Library-level client configuration.

use std::fmt;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http::HeaderValue;
use url::Url;

use super::ConfigError;
use super::defaults;

/// Settings for one [`ApiClient`](crate::api::ApiClient).
///
/// Only the API key is required; everything else has a default.
///
/// # Example
///
/// ```
/// use paymongo::config::ClientConfig;
///
/// let config = ClientConfig::new("sk_test_123")
///     .unwrap()
///     .with_webhook_tolerance(600);
///
/// assert_eq!(config.api_version(), "v1");
/// assert_eq!(config.webhook_tolerance(), 600);
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    authorization: HeaderValue,
    base_url: Url,
    api_version: String,
    webhook_tolerance: i64,
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration with default settings for the given API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiKey`] if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ConfigError::InvalidApiKey {
                reason: "must not be empty".to_string(),
            });
        }

        // The key is the Basic username; the password is empty.
        let credential = STANDARD.encode(format!("{api_key}:"));
        let mut authorization = HeaderValue::from_str(&format!("Basic {credential}")).map_err(
            |e| ConfigError::InvalidApiKey {
                reason: e.to_string(),
            },
        )?;
        authorization.set_sensitive(true);

        let base_url = Url::parse(defaults::BASE_URL).map_err(|e| ConfigError::InvalidUrl {
            url: defaults::BASE_URL.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            api_key,
            authorization,
            base_url,
            api_version: defaults::API_VERSION.to_string(),
            webhook_tolerance: defaults::WEBHOOK_TOLERANCE_SECS,
            connect_timeout: defaults::connect_timeout(),
            request_timeout: defaults::request_timeout(),
        })
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Overrides the API version path segment.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Sets the webhook timestamp tolerance in seconds. Zero or less disables it.
    #[must_use]
    pub const fn with_webhook_tolerance(mut self, seconds: i64) -> Self {
        self.webhook_tolerance = seconds;
        self
    }

    /// Sets the connect and total request timeouts.
    #[must_use]
    pub const fn with_timeouts(mut self, connect: Duration, total: Duration) -> Self {
        self.connect_timeout = connect;
        self.request_timeout = total;
        self
    }

    /// Returns the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the precomputed `Authorization` header value.
    #[must_use]
    pub const fn authorization(&self) -> &HeaderValue {
        &self.authorization
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the API version path segment.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Returns the webhook timestamp tolerance in seconds.
    #[must_use]
    pub const fn webhook_tolerance(&self) -> i64 {
        self.webhook_tolerance
    }

    pub(crate) const fn set_webhook_tolerance(&mut self, seconds: i64) {
        self.webhook_tolerance = seconds;
    }

    /// Returns the connect timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the total request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("api_version", &self.api_version)
            .field("webhook_tolerance", &self.webhook_tolerance)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}
