//! HS256 session token issuance and verification

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sr_shared::SessionConfig;

use crate::domain::entities::identity::Identity;
use crate::domain::value_objects::session_identity::{SessionClaims, SessionIdentity, SESSION_ISSUER};
use crate::errors::{AuthError, DomainError};

/// Issues and verifies session tokens
#[derive(Clone)]
pub struct SessionManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: i64,
}

impl SessionManager {
    /// Create a session manager signing with `secret`
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[SESSION_ISSUER]);
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_seconds,
        }
    }

    /// Create a session manager from the session configuration
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(&config.secret, config.ttl_seconds)
    }

    /// Session lifetime in seconds
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// Issue a session token for a persisted identity
    pub fn issue(&self, identity: &Identity) -> Result<String, DomainError> {
        if !identity.is_persisted() {
            return Err(DomainError::Internal {
                message: "Cannot open a session for an unsaved identity".to_string(),
            });
        }

        let claims = SessionClaims::new(identity.id, &identity.email_norm, self.ttl_seconds);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, event = "session_issue_failed", "Failed to sign session token");
            DomainError::Internal {
                message: "Failed to sign session token".to_string(),
            }
        })
    }

    /// Verify a session token and resolve the identity it carries
    ///
    /// Every failure maps to `AuthError::Unauthenticated`.
    pub fn verify(&self, token: &str) -> Result<SessionIdentity, AuthError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| {
                tracing::debug!(error = %e, event = "session_rejected", "Session token rejected");
                AuthError::Unauthenticated
            },
        )?;

        data.claims.identity().ok_or(AuthError::Unauthenticated)
    }
}
