//! Identity entity representing a person who logged in with their email.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted account keyed by normalized email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Database-assigned identifier, always positive once persisted
    pub id: u64,

    /// Email as first submitted
    pub email: String,

    /// Lower-cased, trimmed email used for lookups
    pub email_norm: String,

    /// Whether the account has a paid plan
    pub is_pro: bool,

    /// When the email was proven by a verification code
    pub email_verified_at: Option<DateTime<Utc>>,

    /// Timestamp when the identity was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the identity was last updated
    pub updated_at: DateTime<Utc>,
}

impl Identity {
    /// Creates an unsaved identity for a verified email
    ///
    /// The id stays `0` until a repository assigns one.
    pub fn new_verified(email: String, email_norm: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            email,
            email_norm,
            is_pro: false,
            email_verified_at: Some(now),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether a repository has assigned an id
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }

    /// Upgrades the identity to the paid plan
    pub fn upgrade_to_pro(&mut self) {
        self.is_pro = true;
        self.updated_at = Utc::now();
    }
}
