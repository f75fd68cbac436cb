//! Session token claims and the authenticated identity they resolve to.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token issuer
pub const SESSION_ISSUER: &str = "say-right";

/// Claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (identity id)
    pub sub: String,

    /// Normalized email of the identity
    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Unique token id
    pub jti: String,
}

impl SessionClaims {
    /// Creates claims for an identity valid for `ttl_seconds`
    pub fn new(identity_id: u64, email: &str, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: identity_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            iss: SESSION_ISSUER.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Resolves the claims to an identity reference
    ///
    /// Returns `None` when the subject is not a positive integer.
    pub fn identity(&self) -> Option<SessionIdentity> {
        let id: u64 = self.sub.parse().ok()?;
        (id > 0).then(|| SessionIdentity {
            id,
            email: self.email.clone(),
            session_id: self.jti.clone(),
            expires_at: self.exp,
        })
    }
}

/// Authenticated identity placed in request-scoped state by the session gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    /// Identity id, always positive
    pub id: u64,

    /// Normalized email
    pub email: String,

    /// Token id (`jti`), the handle used to revoke the session
    pub session_id: String,

    /// Unix time at which the token expires
    pub expires_at: i64,
}

impl SessionIdentity {
    /// Seconds until the token expires, `None` once it has
    pub fn remaining_lifetime(&self, now: i64) -> Option<u64> {
        u64::try_from(self.expires_at - now).ok().filter(|s| *s > 0)
    }
}
