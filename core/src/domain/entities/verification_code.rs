//! Verification code issued for passwordless email login.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Number of distinct codes (`000000..=999999`)
pub const CODE_SPACE: u32 = 1_000_000;

/// A verification code that has been persisted and handed to the mailer
///
/// The store owns the live code; this value only describes what was issued
/// so callers can report timings back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedCode {
    /// The 6-digit, zero-padded code
    pub code: String,

    /// Normalized email the code is bound to
    pub identity: String,

    /// When the code was persisted
    pub issued_at: DateTime<Utc>,

    /// When the store will drop the code
    pub expires_at: DateTime<Utc>,

    /// Seconds until another code may be requested for this identity
    pub resend_after: u64,
}

impl IssuedCode {
    /// Creates an issued code record starting now
    pub fn new(code: String, identity: String, ttl_seconds: u64, resend_after: u64) -> Self {
        let issued_at = Utc::now();
        Self {
            code,
            identity,
            issued_at,
            expires_at: issued_at + Duration::seconds(ttl_seconds as i64),
            resend_after,
        }
    }

    /// Checks if the code has passed its expiry
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Formats a number from the code space as a zero-padded code
pub fn format_code(value: u32) -> String {
    format!("{:0width$}", value % CODE_SPACE, width = CODE_LENGTH)
}

/// Checks that a submitted code is exactly six ASCII digits
pub fn is_well_formed_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
}
