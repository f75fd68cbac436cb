//! Domain-specific error types and error handling.

mod types;


// Re-export all error types
pub use types::{AuthError, CatalogError, DeliveryError, StoreError, WebhookError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Webhook(#[from] WebhookError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::Auth(err.into())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
