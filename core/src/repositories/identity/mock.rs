//! In-memory implementation of IdentityRepository for tests and local runs

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::identity::Identity;
use crate::errors::DomainError;

use super::trait_::IdentityRepository;

/// In-memory identity repository
pub struct MockIdentityRepository {
    identities: Arc<RwLock<HashMap<u64, Identity>>>,
    next_id: AtomicU64,
}

impl MockIdentityRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            identities: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of stored identities
    pub async fn len(&self) -> usize {
        self.identities.read().await.len()
    }

    /// Whether the repository is empty
    pub async fn is_empty(&self) -> bool {
        self.identities.read().await.is_empty()
    }
}

impl Default for MockIdentityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityRepository for MockIdentityRepository {
    async fn find_by_email(&self, email_norm: &str) -> Result<Option<Identity>, DomainError> {
        let identities = self.identities.read().await;
        Ok(identities
            .values()
            .find(|i| i.email_norm == email_norm)
            .cloned())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Identity>, DomainError> {
        let identities = self.identities.read().await;
        Ok(identities.get(&id).cloned())
    }

    async fn create(&self, mut identity: Identity) -> Result<Identity, DomainError> {
        let mut identities = self.identities.write().await;

        if let Some(existing) = identities
            .values()
            .find(|i| i.email_norm == identity.email_norm)
        {
            return Ok(existing.clone());
        }

        identity.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        identities.insert(identity.id, identity.clone());
        Ok(identity)
    }

    async fn mark_pro(&self, id: u64) -> Result<bool, DomainError> {
        let mut identities = self.identities.write().await;
        match identities.get_mut(&id) {
            Some(identity) => {
                identity.is_pro = true;
                identity.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
