//! Verification code and session configuration

use serde::{Deserialize, Serialize};

use super::{env_opt, env_or, Environment};

const DEFAULT_SESSION_SECRET: &str = "your-session-secret-change-in-production";

/// Timings for email verification codes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Minimum seconds between two code requests for the same address
    pub send_cooldown_seconds: u64,

    /// Seconds a code stays redeemable
    pub code_expiration_seconds: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            send_cooldown_seconds: 60,
            code_expiration_seconds: 300,
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            send_cooldown_seconds: env_or(
                "VERIFICATION_SEND_COOLDOWN_SECONDS",
                defaults.send_cooldown_seconds,
            )
            .max(1),
            code_expiration_seconds: env_or(
                "VERIFICATION_CODE_EXPIRATION_SECONDS",
                defaults.code_expiration_seconds,
            )
            .max(1),
        }
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Secret used to sign session tokens
    pub secret: String,

    /// Session lifetime in seconds
    pub ttl_seconds: i64,

    /// Session cookie name
    pub cookie_name: String,

    /// Only send the cookie over HTTPS
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SESSION_SECRET),
            ttl_seconds: 7 * 24 * 3600,
            cookie_name: String::from("say_right_session"),
            secure: false,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    pub fn from_env(environment: Environment) -> Self {
        let defaults = Self::default();
        Self {
            secret: env_opt("SESSION_SECRET").unwrap_or(defaults.secret),
            ttl_seconds: env_or("SESSION_TTL_SECONDS", defaults.ttl_seconds).max(60),
            cookie_name: env_opt("SESSION_COOKIE_NAME").unwrap_or(defaults.cookie_name),
            secure: env_or("SESSION_COOKIE_SECURE", environment.is_production()),
        }
    }

    /// Create a configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SESSION_SECRET
    }
}
