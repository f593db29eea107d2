//! Signature header parsing and HMAC computation.

use hmac::digest::InvalidLength;
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// The fields of a `Paymongo-Signature` header.
///
/// The header is a comma-separated list of `key=value` pairs. Fragments
/// without `=` and unknown keys are skipped. A repeated key keeps its last
/// value. Nothing is trimmed: in `t=1, live=abc` the second key is
/// `" live"`, which is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignatureHeader {
    /// Unix timestamp (`t`). A zero or non-numeric value counts as absent.
    pub timestamp: Option<i64>,
    /// Hex HMAC computed with the live-mode secret (`live`).
    pub live: Option<String>,
    /// Hex HMAC computed with the test-mode secret (`test`).
    pub test: Option<String>,
}

impl SignatureHeader {
    /// Parses a header value. Never fails; missing parts stay `None`.
    #[must_use]
    pub fn parse(header: &str) -> Self {
        let mut parsed = Self::default();

        for fragment in header.split(',') {
            let Some((key, value)) = fragment.split_once('=') else {
                continue;
            };

            match key {
                "t" => parsed.timestamp = value.parse().ok().filter(|t| *t != 0),
                "live" => parsed.live = non_empty(value),
                "test" => parsed.test = non_empty(value),
                _ => {}
            }
        }

        parsed
    }

    /// Returns the signature to verify: `live` if present, else `test`.
    #[must_use]
    pub fn signature(&self) -> Option<&str> {
        self.live.as_deref().or(self.test.as_deref())
    }

    /// Returns true if this header came from a live-mode delivery.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.live.is_some()
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Computes the lowercase hex `HMAC-SHA256(secret, "<timestamp>.<payload>")`.
///
/// `payload` must be the raw body as received, not re-serialized JSON.
///
/// # Errors
///
/// Returns [`InvalidLength`] if the secret is rejected as an HMAC key.
pub fn compute_signature(
    secret: &str,
    timestamp: i64,
    payload: &str,
) -> Result<String, InvalidLength> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())?;
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}
