//! Cache module for verification code storage
//!
//! Provides the Redis client, the Redis-backed `TtlStore` used in
//! production and an in-memory `TtlStore` for tests.

pub mod memory_store;
pub mod redis_client;
pub mod redis_store;


pub use memory_store::InMemoryTtlStore;
pub use redis_client::RedisClient;
pub use redis_store::RedisTtlStore;

// Re-export commonly used types
pub use sr_shared::config::cache::CacheConfig;
