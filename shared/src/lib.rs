//! Shared utilities and common types for the SayRight server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The JSON error body returned by every endpoint
//! - Email normalization, validation and log masking

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, CorsConfig, DatabaseConfig, Environment, MailConfig, ServerConfig,
    SessionConfig, VerificationConfig, WebhookConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use utils::email;
