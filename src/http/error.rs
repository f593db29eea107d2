//! Transport failure type.

use thiserror::Error;

/// A request that never produced an HTTP response.
///
/// This is always fatal to the call that raised it. Nothing in this crate
/// retries a request after a transport failure.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// Covers DNS resolution failures, refused connections, TLS handshake
    /// errors and bodies that could not be read to the end.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The connect or total timeout elapsed.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built from the given URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
