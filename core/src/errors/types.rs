//! Error types for verification, webhooks and the capability traits

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Another code was requested for this identity within the cooldown
    #[error("Too many requests. Please try again in {retry_after} seconds")]
    RateLimited { retry_after: u64 },

    /// The store or mail provider failed; the request may be retried
    #[error("Service temporarily unavailable: {reason}")]
    TransientFailure { reason: String },

    /// The submitted code did not redeem
    #[error("Invalid or expired verification code")]
    InvalidVerificationCode,

    /// No authenticated identity on the request
    #[error("Please login first")]
    Unauthenticated,
}

impl AuthError {
    /// Shorthand for a transient failure
    pub fn transient(reason: impl Into<String>) -> Self {
        AuthError::TransientFailure {
            reason: reason.into(),
        }
    }
}

/// Webhook authentication errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WebhookError {
    #[error("Missing signature")]
    MissingSignature,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid JSON")]
    InvalidPayload,
}

/// Catalog access errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The template is unknown, inactive or has no detail row
    #[error("Template not found")]
    TemplateNotFound,

    /// A free account asked for a pro template
    #[error("Pro required")]
    ProRequired,
}

/// Failure reported by a `TtlStore` backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store connection failed: {message}")]
    Connection { message: String },

    #[error("Store operation failed: {message}")]
    Operation { message: String },
}

/// Failure reported by a `CodeMailer` backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Mail provider rejected the message: {message}")]
    Rejected { message: String },

    #[error("Mail provider unavailable: {message}")]
    Unavailable { message: String },
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        AuthError::transient(err.to_string())
    }
}

impl From<DeliveryError> for AuthError {
    fn from(err: DeliveryError) -> Self {
        AuthError::transient(err.to_string())
    }
}
