//! Command execution logic.
//!
//! Each subcommand produces one JSON document on success, which the
//! entry point prints to stdout.

use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use thiserror::Error;

use paymongo::api::{ApiClient, Listing, Params, Resource};
use paymongo::config::{Command, ConfigError, ValidatedConfig, write_default_config};
use paymongo::http::HttpClient;
use paymongo::time::Clock;
use paymongo::{ErrorKind, Event, WebhookVerifier};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for command execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Required configuration is missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The API call or webhook verification failed.
    #[error(transparent)]
    Api(#[from] paymongo::Error),

    /// Failed to read the webhook payload file.
    #[error("Failed to read payload file '{}': {source}", path.display())]
    ReadPayload {
        /// Path to the payload file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A `--query` argument was not in `key=value` form.
    #[error("Invalid query parameter '{0}': expected 'key=value'")]
    InvalidQuery(String),
}

impl RunError {
    /// Returns true if a webhook delivery failed verification.
    #[must_use]
    pub fn is_verification_failure(&self) -> bool {
        matches!(self, Self::Api(e) if e.kind() == ErrorKind::SignatureVerification)
    }
}

/// Executes one subcommand.
///
/// # Errors
///
/// Returns [`RunError`] if configuration is incomplete or the command fails.
pub async fn execute(command: Command, config: &ValidatedConfig) -> Result<String, RunError> {
    match command {
        Command::Init { output } => {
            write_default_config(&output)?;
            Ok(json!({ "written": output.display().to_string() }).to_string())
        }
        Command::Get { service, id, query } => {
            let client = ApiClient::new(config.client_config()?)?;
            get(&client, &service, id.as_deref(), &query).await
        }
        Command::Verify {
            payload, signature, ..
        } => {
            let verifier = WebhookVerifier::new(config.webhook_tolerance);
            verify(&verifier, &payload, &signature, config.webhook_secret()?)
        }
    }
}

/// Retrieves one resource, or lists the service when `id` is `None`.
///
/// # Errors
///
/// Returns [`RunError`] for malformed query arguments or failed API calls.
pub async fn get<H: HttpClient>(
    client: &ApiClient<H>,
    service: &str,
    id: Option<&str>,
    query: &[String],
) -> Result<String, RunError> {
    let service = client.service_named(service)?;

    let document = match id {
        Some(id) => resource_json(&service.retrieve(id).await?),
        None => {
            let params = parse_query(query)?;
            tracing::debug!(service = %service.kind(), params = params.len(), "Listing resources");
            listing_json(&service.list(params).await?)
        }
    };

    Ok(pretty(&document))
}

/// Verifies a webhook payload stored in a file.
///
/// # Errors
///
/// Returns [`RunError`] if the file cannot be read or verification fails.
pub fn verify<C: Clock>(
    verifier: &WebhookVerifier<C>,
    payload_path: &Path,
    signature: &str,
    secret: &str,
) -> Result<String, RunError> {
    let payload =
        std::fs::read_to_string(payload_path).map_err(|source| RunError::ReadPayload {
            path: payload_path.to_path_buf(),
            source,
        })?;

    let event = verifier
        .verify(&payload, signature, secret)
        .map_err(paymongo::Error::from)?;
    tracing::info!(
        id = event.id.as_deref().unwrap_or("-"),
        event_type = event.event_type.as_deref().unwrap_or("-"),
        "Webhook signature verified"
    );

    Ok(pretty(&event_json(&event)))
}

/// Parses `key=value` arguments into request parameters.
fn parse_query(query: &[String]) -> Result<Params, RunError> {
    query
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .filter(|(key, _)| !key.is_empty())
                .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
                .ok_or_else(|| RunError::InvalidQuery(pair.clone()))
        })
        .collect()
}

fn resource_json(resource: &Resource) -> Value {
    json!({ "id": resource.id, "attributes": resource.attributes })
}

fn listing_json(listing: &Listing) -> Value {
    json!({
        "has_more": listing.has_more,
        "data": listing.data.iter().map(resource_json).collect::<Vec<_>>(),
    })
}

fn event_json(event: &Event) -> Value {
    json!({ "id": event.id, "type": event.event_type, "resource": event.resource })
}

fn pretty(document: &Value) -> String {
    serde_json::to_string_pretty(document).unwrap_or_else(|_| document.to_string())
}
