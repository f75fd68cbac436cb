//! Capability traits consumed by the code service

use async_trait::async_trait;
use std::time::Duration;

use crate::errors::{DeliveryError, StoreError};

/// Key/value store with per-key expiry
///
/// Every operation must be linearizable per key. `set_if_absent` is the only
/// primitive the service relies on for mutual exclusion.
#[async_trait]
pub trait TtlStore: Send + Sync {
    /// Store `value` under `key` only if no live entry exists
    ///
    /// Returns `true` when this call created the entry.
    async fn set_if_absent(&self, key: &str, value: &str, ttl: Duration)
        -> Result<bool, StoreError>;

    /// Fetch the live value under `key`
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous entry
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError>;

    /// Remove `key`; returns `true` if a live entry was removed by this call
    async fn delete(&self, key: &str) -> Result<bool, StoreError>;

    /// Remove `key` only while it still holds `expected`, atomically
    ///
    /// Returns `true` if this call removed the entry.
    async fn delete_if_equals(&self, key: &str, expected: &str) -> Result<bool, StoreError>;

    /// Time left before `key` expires, `None` if absent or without expiry
    async fn ttl_remaining(&self, key: &str) -> Result<Option<Duration>, StoreError>;
}

/// Outbound delivery of verification codes
#[async_trait]
pub trait CodeMailer: Send + Sync {
    /// Deliver `code` to the email address `to`
    async fn send_code(&self, to: &str, code: &str) -> Result<(), DeliveryError>;
}

/// Source of candidate codes
pub trait CodeGenerator: Send + Sync {
    /// Draw a 6-digit, zero-padded candidate
    fn generate(&self) -> String;
}
