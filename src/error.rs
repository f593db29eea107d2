//! The crate-wide error type.
//!
//! Every failure of an API call or webhook verification surfaces as one
//! [`Error`] variant. Nothing is retried, logged or swallowed on the way.

use std::fmt;
use std::sync::OnceLock;

use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::api::{ErrorCollection, Operation, ServiceKind};
use crate::http::HttpError;
use crate::webhook::SignatureVerificationError;

/// Convenience alias for results carrying [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for every fallible SDK operation.
#[derive(Debug, Error)]
pub enum Error {
    /// No HTTP response was received (connection, DNS, TLS, timeout).
    #[error("Transport error: {0}")]
    Transport(#[from] HttpError),

    /// The API rejected the request parameters (HTTP 400).
    #[error("{0}")]
    InvalidRequest(ApiFailure),

    /// The API key was missing or rejected (HTTP 401).
    #[error("{0}")]
    Authentication(ApiFailure),

    /// The endpoint exists but the record does not (HTTP 404 with a body).
    #[error("{0}")]
    ResourceNotFound(ApiFailure),

    /// The endpoint does not exist (HTTP 404 with an empty body).
    ///
    /// This points at a malformed URL built on the client side.
    #[error("The requested API route does not exist")]
    RouteNotFound,

    /// Any other API failure, or a success response that was not valid JSON.
    #[error("{0}")]
    Api(ApiFailure),

    /// A webhook delivery failed verification.
    #[error("Webhook signature verification failed: {0}")]
    SignatureVerification(#[from] SignatureVerificationError),

    /// The service does not offer the requested operation.
    #[error("The {service} service does not support {operation}")]
    UnsupportedOperation {
        /// Service the call was made on
        service: ServiceKind,
        /// Operation that was requested
        operation: Operation,
    },

    /// No service is registered under the given name.
    #[error("Service '{0}' does not exist")]
    UnknownService(String),
}

/// The closed set of error kinds, used for matching without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::Transport`].
    Transport,
    /// See [`Error::InvalidRequest`].
    InvalidRequest,
    /// See [`Error::Authentication`].
    Authentication,
    /// See [`Error::ResourceNotFound`].
    ResourceNotFound,
    /// See [`Error::RouteNotFound`].
    RouteNotFound,
    /// See [`Error::Api`].
    Api,
    /// See [`Error::SignatureVerification`].
    SignatureVerification,
    /// See [`Error::UnsupportedOperation`].
    UnsupportedOperation,
    /// See [`Error::UnknownService`].
    UnknownService,
}

impl ErrorKind {
    /// Returns the stable machine-readable token for this kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Transport => "transport_error",
            Self::InvalidRequest => "invalid_request",
            Self::Authentication => "authentication",
            Self::ResourceNotFound => "resource_not_found",
            Self::RouteNotFound => "route_not_found",
            Self::Api => "api_error",
            Self::SignatureVerification => "signature_verification",
            Self::UnsupportedOperation => "unsupported_operation",
            Self::UnknownService => "unknown_service",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Error {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Self::Authentication(_) => ErrorKind::Authentication,
            Self::ResourceNotFound(_) => ErrorKind::ResourceNotFound,
            Self::RouteNotFound => ErrorKind::RouteNotFound,
            Self::Api(_) => ErrorKind::Api,
            Self::SignatureVerification(_) => ErrorKind::SignatureVerification,
            Self::UnsupportedOperation { .. } => ErrorKind::UnsupportedOperation,
            Self::UnknownService(_) => ErrorKind::UnknownService,
        }
    }

    /// Returns the stable machine-readable token for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Returns the API failure details for HTTP-level errors.
    #[must_use]
    pub const fn api_failure(&self) -> Option<&ApiFailure> {
        match self {
            Self::InvalidRequest(failure)
            | Self::Authentication(failure)
            | Self::ResourceNotFound(failure)
            | Self::Api(failure) => Some(failure),
            _ => None,
        }
    }

    /// Returns the HTTP status, if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::RouteNotFound => Some(StatusCode::NOT_FOUND),
            _ => self.api_failure().map(ApiFailure::status),
        }
    }

    /// Returns the errors reported by the API.
    ///
    /// Empty for errors that did not come with a decodable error body.
    #[must_use]
    pub fn errors(&self) -> ErrorCollection {
        self.api_failure()
            .map(|failure| failure.errors().clone())
            .unwrap_or_default()
    }
}

/// Details of an HTTP-level failure reported by the API.
///
/// The [`ErrorCollection`] is built from the raw body on first access.
#[derive(Debug)]
pub struct ApiFailure {
    status: StatusCode,
    message: String,
    body: Option<Value>,
    errors: OnceLock<ErrorCollection>,
}

impl ApiFailure {
    /// Creates a failure for the given status and decoded body.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            status,
            message: message.into(),
            body,
            errors: OnceLock::new(),
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the message describing the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the decoded error body, if one was received.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Returns the errors listed in the body.
    pub fn errors(&self) -> &ErrorCollection {
        self.errors.get_or_init(|| {
            self.body
                .as_ref()
                .map(ErrorCollection::from_body)
                .unwrap_or_default()
        })
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(detail) = self.errors().first().and_then(|e| e.detail.as_deref()) {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}
