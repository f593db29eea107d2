//! Webhook signature verification.
//!
//! PayMongo signs every webhook delivery and sends the signature in the
//! `Paymongo-Signature` header:
//!
//! ```text
//! t=1496734173,test=5257a869e7...,live=
//! ```
//!
//! Verification is a single pass through these steps, any of which can
//! reject the delivery:
//! 1. Parse the header ([`SignatureHeader`])
//! 2. Require a timestamp and a `live` or `test` signature
//! 3. Check the timestamp is within the tolerance window
//! 4. Recompute `HMAC-SHA256(secret, "<t>.<raw payload>")`
//! 5. Compare it to the received signature in constant time
//! 6. Decode the payload and build the [`Event`]

mod error;
mod event;
mod signature;
mod verifier;


pub use error::SignatureVerificationError;
pub use event::Event;
pub use signature::{SignatureHeader, compute_signature};
pub use verifier::WebhookVerifier;

/// Name of the HTTP header carrying the webhook signature.
pub const SIGNATURE_HEADER: &str = "Paymongo-Signature";
