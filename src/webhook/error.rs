//! Rejection reasons for webhook deliveries.

use thiserror::Error;

/// Why a webhook delivery was rejected.
///
/// All variants mean the same thing to the caller: do not trust the
/// payload. The variant only tells a human what to look at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureVerificationError {
    /// The header lacks a timestamp, or has neither a `live` nor a `test` signature.
    #[error("unable to extract timestamp or signature from header")]
    MalformedHeader,

    /// The signed timestamp is too far from the current time.
    #[error("timestamp exceeds tolerance")]
    TimestampOutsideTolerance {
        /// Timestamp from the header
        timestamp: i64,
        /// Current time when verifying
        now: i64,
        /// Allowed difference in seconds
        tolerance: i64,
    },

    /// The secret cannot be used as an HMAC key.
    #[error("webhook secret cannot be used as a signing key")]
    InvalidSecret,

    /// The recomputed signature differs from the received one.
    #[error("signature mismatch")]
    SignatureMismatch,

    /// The signature matched but the payload is not valid JSON.
    #[error("invalid JSON payload: {reason}")]
    InvalidPayload {
        /// Decoder message
        reason: String,
    },
}
