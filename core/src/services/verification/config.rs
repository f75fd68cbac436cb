//! Configuration for the code service

use std::time::Duration;

use sr_shared::VerificationConfig;

/// Maximum number of candidates drawn before giving up on a unique code
pub const MAX_GENERATION_ATTEMPTS: u32 = 5;

/// Configuration for the code service
#[derive(Debug, Clone)]
pub struct CodeServiceConfig {
    /// Minimum interval between two issuances for the same identity
    pub send_cooldown: Duration,
    /// How long an issued code stays redeemable
    pub code_ttl: Duration,
    /// Candidates drawn per issuance before reporting a transient failure
    pub max_generation_attempts: u32,
}

impl Default for CodeServiceConfig {
    fn default() -> Self {
        Self {
            send_cooldown: Duration::from_secs(60),
            code_ttl: Duration::from_secs(300),
            max_generation_attempts: MAX_GENERATION_ATTEMPTS,
        }
    }
}

impl From<&VerificationConfig> for CodeServiceConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            send_cooldown: Duration::from_secs(config.send_cooldown_seconds),
            code_ttl: Duration::from_secs(config.code_expiration_seconds),
            ..Default::default()
        }
    }
}
