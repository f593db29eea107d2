//! Building outbound HTTP requests for API calls.

use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method};
use serde_json::{Map, Value, json};
use url::Url;

use super::service::{Action, ServiceKind};
use crate::config::ClientConfig;
use crate::http::{HttpError, HttpRequest};

/// Request parameters: query string entries for GET, body attributes otherwise.
pub type Params = Map<String, Value>;

/// One API call, before it is turned into an [`HttpRequest`].
///
/// Targets `<base>/<version>/<service>[/<id>][/<action>]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Resource collection
    pub service: ServiceKind,
    /// Resource id
    pub id: Option<String>,
    /// Action on the resource
    pub action: Option<Action>,
    /// Query parameters (GET) or body attributes (POST, PUT, DELETE)
    pub params: Params,
}

impl ApiRequest {
    /// Creates a request against a service's collection URL.
    #[must_use]
    pub fn new(method: Method, service: ServiceKind) -> Self {
        Self {
            method,
            service,
            id: None,
            action: None,
            params: Params::new(),
        }
    }

    /// Targets a single resource.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Targets an action on the resource.
    #[must_use]
    pub const fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Sets the parameters.
    #[must_use]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Resolves the full URL, query string included for GET requests.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidUrl`] if the base URL cannot take path segments.
    pub fn url(&self, base: &Url, version: &str) -> Result<Url, HttpError> {
        let mut url = base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                HttpError::InvalidUrl(format!("{base} cannot be used as a base URL"))
            })?;
            segments
                .pop_if_empty()
                .push(version)
                .push(self.service.name());
            if let Some(id) = &self.id {
                segments.push(id);
            }
            if let Some(action) = self.action {
                segments.push(action.name());
            }
        }

        if self.method == Method::GET && !self.params.is_empty() {
            let mut pairs = Vec::new();
            for (key, value) in &self.params {
                flatten_query(key.clone(), value, &mut pairs);
            }
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }

    /// Returns the JSON body for mutating requests with parameters.
    ///
    /// The parameters are wrapped as `{"data": {"attributes": params}}`.
    #[must_use]
    pub fn body(&self) -> Option<Vec<u8>> {
        if self.method == Method::GET || self.params.is_empty() {
            return None;
        }

        let envelope = json!({ "data": { "attributes": self.params } });
        Some(envelope.to_string().into_bytes())
    }

    /// Builds the HTTP request with JSON content type and Basic authentication.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidUrl`] if the URL cannot be built.
    pub fn to_http(&self, config: &ClientConfig) -> Result<HttpRequest, HttpError> {
        let url = self.url(config.base_url(), config.api_version())?;

        let mut request = HttpRequest::new(self.method.clone(), url)
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_header(AUTHORIZATION, config.authorization().clone());

        if let Some(body) = self.body() {
            request = request.with_body(body);
        }

        Ok(request)
    }
}

/// Flattens a JSON value into form-style query pairs.
///
/// Nested objects become `key[sub]`, arrays `key[0]`, booleans `1`/`0`,
/// and nulls are dropped.
fn flatten_query(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => pairs.push((key, if *flag { "1" } else { "0" }.to_string())),
        Value::Number(number) => pairs.push((key, number.to_string())),
        Value::String(text) => pairs.push((key, text.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_query(format!("{key}[{index}]"), item, pairs);
            }
        }
        Value::Object(entries) => {
            for (sub, item) in entries {
                flatten_query(format!("{key}[{sub}]"), item, pairs);
            }
        }
    }
}
