//! The values exchanged with a transport, and the transport trait itself.

use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use url::Url;

use super::HttpError;

/// One outbound API call as the transport sees it.
///
/// The URL already carries the version path and any query string; the body,
/// if any, is the serialized `{"data":{"attributes":...}}` envelope.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// GET for retrieve and list, POST, PUT or DELETE otherwise
    pub method: Method,
    /// Fully resolved endpoint
    pub url: Url,
    /// Content type and Basic authorization
    pub headers: HeaderMap,
    /// JSON body for mutating calls
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Starts a request with no headers and no body.
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets a header. A second call with the same name overwrites the first.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// What came back from the API: a status and the complete body.
///
/// Any status is a response here, including 4xx and 5xx; deciding what a
/// status means is left to the API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status line code
    pub status: StatusCode,
    /// Raw body bytes, possibly empty
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub const fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// True below 400. PayMongo reports every failure as 4xx or 5xx, so the
    /// body of anything else goes to the normalizer.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.as_u16() < 400
    }
}

/// Sends one [`HttpRequest`] to the API.
///
/// [`ApiClient`](crate::api::ApiClient) is generic over this trait, so tests
/// can swap in a transport that records requests and replays canned
/// responses.
///
/// # Example
///
/// ```
/// use http::StatusCode;
/// use paymongo::http::{HttpClient, HttpError, HttpRequest, HttpResponse};
///
/// struct Offline;
///
/// impl HttpClient for Offline {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(StatusCode::SERVICE_UNAVAILABLE, Vec::new()))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Performs a single attempt.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] only when no response arrived at all.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
