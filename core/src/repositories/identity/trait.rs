//! Identity repository trait defining the interface for account persistence.
//!
//! Identities are keyed by normalized email. The trait is async-first so the
//! MySQL adapter in `sr_infra` and the in-memory adapter used by tests can be
//! swapped behind `Arc<R>`.

use async_trait::async_trait;

use crate::domain::entities::identity::Identity;
use crate::errors::DomainError;

/// Repository trait for Identity persistence operations
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Find an identity by normalized email
    ///
    /// # Returns
    /// * `Ok(Some(Identity))` - Identity found
    /// * `Ok(None)` - No identity with that email
    /// * `Err(DomainError)` - Backend error
    async fn find_by_email(&self, email_norm: &str) -> Result<Option<Identity>, DomainError>;

    /// Find an identity by id
    async fn find_by_id(&self, id: u64) -> Result<Option<Identity>, DomainError>;

    /// Persist a new identity and return it with its assigned id
    ///
    /// Creation is idempotent on `email_norm`: when a concurrent login
    /// already inserted the row, the existing identity is returned.
    async fn create(&self, identity: Identity) -> Result<Identity, DomainError>;

    /// Set the pro flag on an identity
    ///
    /// # Returns
    /// * `Ok(true)` - The identity exists and is now pro
    /// * `Ok(false)` - No identity with that id
    async fn mark_pro(&self, id: u64) -> Result<bool, DomainError>;
}
