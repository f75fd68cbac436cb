//! # Infrastructure Layer
//!
//! Concrete adapters for the capability traits declared in `sr_core`:
//!
//! - **Cache**: Redis client, `RedisTtlStore` and the in-memory `InMemoryTtlStore`
//! - **Database**: MySQL identity repository using SQLx
//! - **Mail**: verification code delivery over an HTTP mail API, plus a mock sender

// Re-export core types for convenience
pub use sr_core::errors::*;

/// Cache module - TTL store adapters
pub mod cache;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Mail module - verification code delivery
pub mod mail;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail service error
    #[error("Mail service error: {0}")]
    Mail(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl InfrastructureError {
    /// Whether the failure came from reaching the backend rather than the command
    pub fn is_connection_failure(&self) -> bool {
        match self {
            InfrastructureError::Cache(e) => {
                e.is_io_error() || e.is_timeout() || e.is_connection_dropped() || e.is_connection_refusal()
            }
            InfrastructureError::Database(e) => {
                matches!(e, sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed)
            }
            InfrastructureError::Http(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}

impl From<InfrastructureError> for StoreError {
    fn from(error: InfrastructureError) -> Self {
        let message = error.to_string();
        if error.is_connection_failure() {
            StoreError::Connection { message }
        } else {
            StoreError::Operation { message }
        }
    }
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::Internal {
            message: error.to_string(),
        }
    }
}
