//! Email identity value object used as the key for code issuance.

use std::fmt;

use serde::{Deserialize, Serialize};
use sr_shared::email::{is_valid_email, mask_email, normalize_email};

use crate::errors::DomainError;

/// A validated, normalized email address
///
/// Keeps the address as submitted (trimmed) alongside the lower-cased form
/// that keys every store entry and repository lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailIdentity {
    raw: String,
    normalized: String,
}

impl EmailIdentity {
    /// Validates and normalizes a submitted email
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let normalized = normalize_email(input);
        if !is_valid_email(&normalized) {
            return Err(DomainError::Validation {
                message: "Invalid email format".to_string(),
            });
        }
        Ok(Self {
            raw: input.trim().to_string(),
            normalized,
        })
    }

    /// The trimmed address as submitted
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized address
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Masked form for logs
    pub fn masked(&self) -> String {
        mask_email(&self.normalized)
    }
}

impl fmt::Display for EmailIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl AsRef<str> for EmailIdentity {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}
