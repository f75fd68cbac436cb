//! Seam between the HTTP session gate and session validation

use async_trait::async_trait;

use crate::domain::value_objects::SessionIdentity;
use crate::errors::AuthError;

/// Resolves a presented session token to the identity it authenticates
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    /// Every failure, including a revoked token, is `AuthError::Unauthenticated`
    async fn authenticate(&self, token: &str) -> Result<SessionIdentity, AuthError>;
}
