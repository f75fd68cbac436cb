//! Billing webhook configuration

use serde::{Deserialize, Serialize};

use super::{env_opt, env_or};

/// Paddle webhook configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebhookConfig {
    /// Shared secret used to sign events; `None` rejects every event
    #[serde(default)]
    pub secret: Option<String>,

    /// Allowed clock skew between the signed timestamp and now, in seconds (0 disables the check)
    #[serde(default = "default_tolerance_seconds")]
    pub tolerance_seconds: u64,

    /// Header carrying the `ts=...;h1=...` signature
    #[serde(default = "default_signature_header")]
    pub signature_header: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            secret: None,
            tolerance_seconds: default_tolerance_seconds(),
            signature_header: default_signature_header(),
        }
    }
}

impl WebhookConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            secret: env_opt("PADDLE_WEBHOOK_SECRET_KEY"),
            tolerance_seconds: env_or("PADDLE_WEBHOOK_TOLERANCE_SECONDS", default_tolerance_seconds()),
            signature_header: env_opt("PADDLE_WEBHOOK_SIGNATURE_HEADER")
                .unwrap_or_else(default_signature_header),
        }
    }

    /// Create a configuration with the given secret
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
            ..Default::default()
        }
    }

    /// Whether a signing secret is available
    pub fn is_configured(&self) -> bool {
        self.secret.as_deref().map_or(false, |s| !s.is_empty())
    }

    /// Freshness tolerance, `None` when disabled
    pub fn tolerance(&self) -> Option<u64> {
        (self.tolerance_seconds > 0).then_some(self.tolerance_seconds)
    }
}

fn default_tolerance_seconds() -> u64 {
    300
}

fn default_signature_header() -> String {
    String::from("Paddle-Signature")
}
