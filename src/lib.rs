//! PayMongo client SDK.
//!
//! A library for calling the PayMongo payments API and verifying the
//! signed webhooks it delivers.
//!
//! - [`api`]: authenticated requests, response normalization, error classification
//! - [`webhook`]: signature verification and event construction
//! - [`http`]: the transport seam and its reqwest implementation
//! - [`config`]: client settings, TOML file and CLI configuration

pub mod api;
pub mod config;
mod error;
pub mod http;
pub mod time;
pub mod webhook;

pub use api::{ApiClient, ServiceKind};
pub use config::ClientConfig;
pub use error::{ApiFailure, Error, ErrorKind, Result};
pub use webhook::{Event, WebhookVerifier};
