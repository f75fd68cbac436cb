//! Redis-backed `TtlStore`
//!
//! Every key is namespaced with the configured prefix, so
//! `code:123456` is stored as `biz:say_right:code:123456` by default.

use async_trait::async_trait;
use std::time::Duration;

use sr_core::errors::StoreError;
use sr_core::services::verification::TtlStore;

use crate::cache::{CacheConfig, RedisClient};

/// Verification code store on top of Redis
#[derive(Clone)]
pub struct RedisTtlStore {
    client: RedisClient,
    config: CacheConfig,
}

impl RedisTtlStore {
    /// Create a store using the prefix from `config`
    pub fn new(client: RedisClient, config: &CacheConfig) -> Self {
        Self {
            client,
            config: config.clone(),
        }
    }

    /// Underlying client, for health checks
    pub fn client(&self) -> &RedisClient {
        &self.client
    }

    /// Full Redis key for a logical key
    pub fn full_key(&self, key: &str) -> String {
        self.config.make_key(key)
    }
}

#[async_trait]
impl TtlStore for RedisTtlStore {
    async fn set_if_absent(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<bool, StoreError> {
        Ok(self
            .client
            .set_if_absent(&self.full_key(key), value, ttl)
            .await?)
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.client.get(&self.full_key(key)).await?)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        Ok(self
            .client
            .set_with_ttl(&self.full_key(key), value, ttl)
            .await?)
    }

    async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.client.delete(&self.full_key(key)).await?)
    }

    async fn delete_if_equals(&self, key: &str, expected: &str) -> Result<bool, StoreError> {
        Ok(self
            .client
            .delete_if_equals(&self.full_key(key), expected)
            .await?)
    }

    async fn ttl_remaining(&self, key: &str) -> Result<Option<Duration>, StoreError> {
        Ok(self.client.ttl_remaining(&self.full_key(key)).await?)
    }
}
