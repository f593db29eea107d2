//! Mapping of failed responses onto [`Error`] variants.

use http::StatusCode;
use serde_json::Value;

use crate::error::{ApiFailure, Error};

/// Classifies an HTTP response with status >= 400.
///
/// | status | variant |
/// |---|---|
/// | 400 | [`Error::InvalidRequest`] |
/// | 401 | [`Error::Authentication`] |
/// | 404, non-empty body | [`Error::ResourceNotFound`] |
/// | 404, empty body | [`Error::RouteNotFound`] |
/// | anything else | [`Error::Api`] |
///
/// A body that is not valid JSON is kept as "no body"; the status alone
/// still decides the variant.
#[must_use]
pub fn classify(status: StatusCode, body: &[u8]) -> Error {
    let decoded = serde_json::from_slice::<Value>(body).ok();
    let message = format!("PayMongo API Error - HTTP {}", status.as_u16());
    let failure = || ApiFailure::new(status, message.clone(), decoded.clone());

    match status {
        StatusCode::BAD_REQUEST => Error::InvalidRequest(failure()),
        StatusCode::UNAUTHORIZED => Error::Authentication(failure()),
        StatusCode::NOT_FOUND if body.is_empty() => Error::RouteNotFound,
        StatusCode::NOT_FOUND => Error::ResourceNotFound(failure()),
        _ => Error::Api(failure()),
    }
}

/// Builds the error for a success response whose body is not valid JSON.
#[must_use]
pub fn undecodable_body(status: StatusCode) -> Error {
    Error::Api(ApiFailure::new(
        status,
        "Invalid JSON response from the API",
        None,
    ))
}
