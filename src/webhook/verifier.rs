//! The webhook verification pipeline.

use std::time::UNIX_EPOCH;

use subtle::ConstantTimeEq;

use super::error::SignatureVerificationError;
use super::event::Event;
use super::signature::{SignatureHeader, compute_signature};
use crate::api::NormalizedResponse;
use crate::config::defaults;
use crate::time::{Clock, SystemClock};

/// Verifies signed webhook deliveries and turns them into [`Event`]s.
///
/// # Type Parameters
///
/// - `C`: The clock used for the freshness check (defaults to [`SystemClock`])
///
/// # Example
///
/// ```
/// use paymongo::webhook::{WebhookVerifier, compute_signature};
///
/// let payload = r#"{"data":{"id":"evt_1","attributes":{"type":"payment.paid","data":{}}}}"#;
/// let now = std::time::SystemTime::now()
///     .duration_since(std::time::UNIX_EPOCH)
///     .unwrap()
///     .as_secs() as i64;
/// let signature = compute_signature("whsk_secret", now, payload).unwrap();
/// let header = format!("t={now},test={signature}");
///
/// let event = WebhookVerifier::default()
///     .verify(payload, &header, "whsk_secret")
///     .unwrap();
/// assert_eq!(event.event_type.as_deref(), Some("payment.paid"));
/// ```
#[derive(Debug, Clone)]
pub struct WebhookVerifier<C = SystemClock> {
    tolerance: i64,
    clock: C,
}

impl WebhookVerifier<SystemClock> {
    /// Creates a verifier with the given tolerance in seconds.
    ///
    /// A tolerance of zero or less disables the freshness check.
    #[must_use]
    pub const fn new(tolerance: i64) -> Self {
        Self {
            tolerance,
            clock: SystemClock,
        }
    }
}

impl Default for WebhookVerifier<SystemClock> {
    fn default() -> Self {
        Self::new(defaults::WEBHOOK_TOLERANCE_SECS)
    }
}

impl<C> WebhookVerifier<C> {
    /// Replaces the clock used for the freshness check.
    #[must_use]
    pub fn with_clock<C2>(self, clock: C2) -> WebhookVerifier<C2> {
        WebhookVerifier {
            tolerance: self.tolerance,
            clock,
        }
    }

    /// Replaces the tolerance in seconds.
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: i64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the tolerance in seconds.
    #[must_use]
    pub const fn tolerance(&self) -> i64 {
        self.tolerance
    }
}

impl<C: Clock> WebhookVerifier<C> {
    /// Verifies one delivery.
    ///
    /// `payload` must be the raw request body exactly as received.
    ///
    /// # Errors
    ///
    /// Returns the [`SignatureVerificationError`] for the first failed step.
    pub fn verify(
        &self,
        payload: &str,
        signature_header: &str,
        secret: &str,
    ) -> Result<Event, SignatureVerificationError> {
        let header = SignatureHeader::parse(signature_header);
        let (timestamp, received) = match (header.timestamp, header.signature()) {
            (Some(timestamp), Some(signature)) => (timestamp, signature),
            _ => return Err(SignatureVerificationError::MalformedHeader),
        };

        self.check_freshness(timestamp)?;

        let expected = compute_signature(secret, timestamp, payload)
            .map_err(|_| SignatureVerificationError::InvalidSecret)?;
        if !bool::from(expected.as_bytes().ct_eq(received.as_bytes())) {
            return Err(SignatureVerificationError::SignatureMismatch);
        }

        let decoded = serde_json::from_str(payload).map_err(|e| {
            SignatureVerificationError::InvalidPayload {
                reason: e.to_string(),
            }
        })?;

        Ok(Event::from_response(&NormalizedResponse::from_value(decoded)))
    }

    fn check_freshness(&self, timestamp: i64) -> Result<(), SignatureVerificationError> {
        if self.tolerance <= 0 {
            return Ok(());
        }

        let now = self.unix_now();
        if now.abs_diff(timestamp) > self.tolerance.unsigned_abs() {
            return Err(SignatureVerificationError::TimestampOutsideTolerance {
                timestamp,
                now,
                tolerance: self.tolerance,
            });
        }

        Ok(())
    }

    fn unix_now(&self) -> i64 {
        self.clock
            .now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}
