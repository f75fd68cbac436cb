//! HMAC-SHA256 webhook authenticator

use chrono::Utc;
use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use sr_shared::WebhookConfig;

use crate::errors::WebhookError;

use super::signature::SignatureHeader;

type HmacSha256 = Hmac<Sha256>;

/// Verifies that webhook deliveries were signed with the shared secret
///
/// With no secret configured every delivery is rejected.
#[derive(Clone)]
pub struct WebhookAuthenticator {
    secret: Option<String>,
    tolerance_seconds: Option<u64>,
}

impl std::fmt::Debug for WebhookAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookAuthenticator")
            .field("configured", &self.is_configured())
            .field("tolerance_seconds", &self.tolerance_seconds)
            .finish()
    }
}

impl WebhookAuthenticator {
    /// Create an authenticator; a `tolerance_seconds` of 0 disables the freshness check
    pub fn new(secret: Option<String>, tolerance_seconds: u64) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
            tolerance_seconds: (tolerance_seconds > 0).then_some(tolerance_seconds),
        }
    }

    /// Create an authenticator from the webhook configuration
    pub fn from_config(config: &WebhookConfig) -> Self {
        Self::new(config.secret.clone(), config.tolerance_seconds)
    }

    /// Whether a signing secret is available
    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Verify a delivery against the current time
    pub fn verify(&self, signature_header: &str, body: &[u8]) -> bool {
        self.verify_at(signature_header, body, Utc::now().timestamp())
    }

    /// Verify a delivery as if received at unix time `now`
    pub fn verify_at(&self, signature_header: &str, body: &[u8], now: i64) -> bool {
        let Some(secret) = self.secret.as_deref() else {
            tracing::error!(
                event = "webhook_secret_missing",
                "PADDLE_WEBHOOK_SECRET_KEY is not set; rejecting webhook"
            );
            return false;
        };

        let Some(header) = SignatureHeader::parse(signature_header) else {
            tracing::warn!(
                event = "webhook_signature_malformed",
                "Signature header is missing ts or h1"
            );
            return false;
        };

        let Some(ts) = header.unix_timestamp() else {
            tracing::warn!(
                event = "webhook_signature_malformed",
                "Signature timestamp is not an integer"
            );
            return false;
        };

        if let Some(tolerance) = self.tolerance_seconds {
            let skew = now.abs_diff(ts);
            if skew > tolerance {
                tracing::warn!(
                    skew_seconds = skew,
                    tolerance_seconds = tolerance,
                    event = "webhook_signature_stale",
                    "Signature timestamp outside tolerance window"
                );
                return false;
            }
        }

        let Some(expected) = sign_payload(secret, &header.timestamp, body) else {
            return false;
        };

        let matched = header
            .signatures
            .iter()
            .any(|sig| constant_time_eq(sig.as_bytes(), expected.as_bytes()));

        if !matched {
            tracing::warn!(
                event = "webhook_signature_mismatch",
                "Webhook signature mismatch"
            );
        }
        matched
    }

    /// Verify a delivery, distinguishing a missing header from a bad signature
    pub fn authenticate(
        &self,
        signature_header: Option<&str>,
        body: &[u8],
    ) -> Result<(), WebhookError> {
        let header = signature_header
            .filter(|h| !h.trim().is_empty())
            .ok_or(WebhookError::MissingSignature)?;
        if self.verify(header, body) {
            Ok(())
        } else {
            Err(WebhookError::InvalidSignature)
        }
    }
}

/// Hex-encoded HMAC-SHA256 of `timestamp + ":" + body`
pub fn sign_payload(secret: &str, timestamp: &str, body: &[u8]) -> Option<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(timestamp.as_bytes());
    mac.update(b":");
    mac.update(body);
    Some(hex::encode(mac.finalize().into_bytes()))
}
