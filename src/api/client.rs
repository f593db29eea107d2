//! The API client and per-service handles.

use http::Method;
use serde_json::Value;

use super::classify::{classify, undecodable_body};
use super::entities::{Listing, Resource};
use super::request::{ApiRequest, Params};
use super::resource::NormalizedResponse;
use super::service::{Action, Operation, ServiceKind};
use crate::config::ClientConfig;
use crate::error::Error;
use crate::http::{HttpClient, ReqwestClient};
use crate::webhook::{Event, WebhookVerifier};

/// Client for the PayMongo REST API.
///
/// Each call makes exactly one HTTP request. Successful responses come back
/// as [`NormalizedResponse`]s; failures as [`Error`].
///
/// # Type Parameters
///
/// - `H`: The HTTP transport (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use paymongo::api::{ApiClient, ServiceKind};
/// use paymongo::config::ClientConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::new(ClientConfig::new("sk_test_123")?)?;
/// let payment = client.service(ServiceKind::Payments).retrieve("pay_123").await?;
/// println!("{:?}", payment.get("amount"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ApiClient<H = ReqwestClient> {
    config: ClientConfig,
    transport: H,
}

impl ApiClient<ReqwestClient> {
    /// Creates a client using reqwest with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the HTTP client cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let transport =
            ReqwestClient::with_timeouts(config.connect_timeout(), config.request_timeout())?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<H> ApiClient<H> {
    /// Creates a client over a custom transport.
    #[must_use]
    pub const fn with_transport(config: ClientConfig, transport: H) -> Self {
        Self { config, transport }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &H {
        &self.transport
    }

    /// Returns the webhook timestamp tolerance in seconds.
    #[must_use]
    pub const fn webhook_tolerance(&self) -> i64 {
        self.config.webhook_tolerance()
    }

    /// Sets the webhook timestamp tolerance. Zero or less disables the check.
    ///
    /// Takes `&mut self`, so the value cannot change while a verification
    /// borrows the client.
    pub const fn set_webhook_tolerance(&mut self, seconds: i64) {
        self.config.set_webhook_tolerance(seconds);
    }

    /// Returns a verifier using this client's tolerance and the system clock.
    #[must_use]
    pub const fn webhook_verifier(&self) -> WebhookVerifier {
        WebhookVerifier::new(self.webhook_tolerance())
    }

    /// Verifies a webhook delivery and returns its event.
    ///
    /// `payload` must be the raw request body exactly as received and
    /// `signature_header` the value of the `Paymongo-Signature` header.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SignatureVerification`] if verification fails.
    pub fn construct_event(
        &self,
        payload: &str,
        signature_header: &str,
        secret: &str,
    ) -> Result<Event, Error> {
        Ok(self
            .webhook_verifier()
            .verify(payload, signature_header, secret)?)
    }
}

impl<H: HttpClient> ApiClient<H> {
    /// Sends one API request and normalizes the response.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] if no response was received
    /// - a classified error if the status is 400 or above
    /// - [`Error::Api`] if a success response is not valid JSON
    pub async fn send(&self, request: ApiRequest) -> Result<NormalizedResponse, Error> {
        let http_request = request.to_http(&self.config)?;
        tracing::debug!(
            method = %http_request.method,
            url = %http_request.url,
            "Sending API request"
        );

        let response = self.transport.request(http_request).await?;
        tracing::debug!(status = %response.status, "Received API response");

        if !response.is_success() {
            return Err(classify(response.status, &response.body));
        }

        let decoded: Value = serde_json::from_slice(&response.body)
            .map_err(|_| undecodable_body(response.status))?;

        Ok(NormalizedResponse::from_value(decoded))
    }

    /// Returns a handle for one service.
    #[must_use]
    pub const fn service(&self, kind: ServiceKind) -> Service<'_, H> {
        Service { client: self, kind }
    }

    /// Resolves a service by name, e.g. `"payment_intents"` or `"paymentIntents"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownService`] for names outside the registry.
    pub fn service_named(&self, name: &str) -> Result<Service<'_, H>, Error> {
        Ok(self.service(name.parse()?))
    }
}

/// A handle for the operations of one service.
///
/// Operations the service does not offer fail with
/// [`Error::UnsupportedOperation`] without sending anything.
#[derive(Debug)]
pub struct Service<'a, H> {
    client: &'a ApiClient<H>,
    kind: ServiceKind,
}

impl<H: HttpClient> Service<'_, H> {
    /// Returns the service kind.
    #[must_use]
    pub const fn kind(&self) -> ServiceKind {
        self.kind
    }

    async fn call(&self, operation: Operation, request: ApiRequest) -> Result<Resource, Error> {
        self.kind.ensure_supports(operation)?;
        let response = self.client.send(request).await?;
        Ok(Resource::from_response(&response))
    }

    /// Creates a resource.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the call fails or the service cannot create.
    pub async fn create(&self, params: Params) -> Result<Resource, Error> {
        let request = ApiRequest::new(Method::POST, self.kind).with_params(params);
        self.call(Operation::Create, request).await
    }

    /// Retrieves a resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the call fails.
    pub async fn retrieve(&self, id: &str) -> Result<Resource, Error> {
        let request = ApiRequest::new(Method::GET, self.kind).with_id(id);
        self.call(Operation::Retrieve, request).await
    }

    /// Updates a resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the call fails or the service cannot update.
    pub async fn update(&self, id: &str, params: Params) -> Result<Resource, Error> {
        let method = self.kind.update_method().ok_or(Error::UnsupportedOperation {
            service: self.kind,
            operation: Operation::Update,
        })?;
        let request = ApiRequest::new(method, self.kind)
            .with_id(id)
            .with_params(params);
        self.call(Operation::Update, request).await
    }

    /// Deletes a resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the call fails or the service cannot delete.
    pub async fn delete(&self, id: &str) -> Result<Resource, Error> {
        let request = ApiRequest::new(Method::DELETE, self.kind).with_id(id);
        self.call(Operation::Delete, request).await
    }

    /// Performs an action such as `capture` or `enable` on a resource.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the call fails or the action belongs to another service.
    pub async fn action(&self, id: &str, action: Action, params: Params) -> Result<Resource, Error> {
        let request = ApiRequest::new(Method::POST, self.kind)
            .with_id(id)
            .with_action(action)
            .with_params(params);
        self.call(Operation::Action(action), request).await
    }

    /// Lists resources, passing `params` as query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the call fails or the service cannot list.
    pub async fn list(&self, params: Params) -> Result<Listing, Error> {
        self.kind.ensure_supports(Operation::List)?;
        let request = ApiRequest::new(Method::GET, self.kind).with_params(params);
        let response = self.client.send(request).await?;
        Ok(Listing::from_response(&response))
    }
}
