//! Transport layer for talking to the PayMongo API.
//!
//! This module provides:
//! - Request/response value types ([`HttpRequest`], [`HttpResponse`])
//! - The transport seam ([`HttpClient`])
//! - The production transport with fixed timeouts ([`ReqwestClient`])
//! - Transport failures ([`HttpError`])
//!
//! A transport never interprets status codes. Anything that came back over
//! the wire, including a 500, is an [`HttpResponse`]; only failures to get a
//! response at all are reported as [`HttpError`].

mod client;
mod error;
mod types;


pub use client::ReqwestClient;
pub use error::HttpError;
pub use types::{HttpClient, HttpRequest, HttpResponse};
