//! The request/response pipeline for the PayMongo REST API.
//!
//! This module provides:
//! - The API client and service handles ([`ApiClient`], [`Service`])
//! - The service registry ([`ServiceKind`], [`Operation`], [`Action`])
//! - Request building ([`ApiRequest`])
//! - Response normalization ([`NormalizedResponse`])
//! - Error classification ([`classify`]) and API error entries ([`ErrorCollection`])
//! - Typed views ([`Resource`], [`Listing`], [`Webhook`])

mod classify;
mod client;
mod entities;
mod errors;
mod request;
mod resource;
mod service;

#[cfg(test)]
mod service_tests;

pub use classify::{classify, undecodable_body};
pub use client::{ApiClient, Service};
pub use entities::{Listing, Resource, Webhook};
pub use errors::{ApiError, ErrorCollection, ErrorSource};
pub use request::{ApiRequest, Params};
pub use resource::{NormalizedResponse, ResponseShape};
pub use service::{Action, Operation, ServiceKind};
