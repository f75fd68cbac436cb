//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Verification code timings and session cookies
//! - `cache` - Redis connection and key prefix
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `mail` - Outbound mail provider
//! - `server` - HTTP server and CORS configuration
//! - `webhook` - Billing webhook signature verification

pub mod auth;
pub mod cache;
pub mod database;
pub mod environment;
pub mod mail;
pub mod server;
pub mod webhook;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// Re-export commonly used types
pub use auth::{SessionConfig, VerificationConfig};
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use mail::{MailConfig, MailProvider};
pub use server::{CorsConfig, ServerConfig};
pub use webhook::WebhookConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Cache configuration
    pub cache: CacheConfig,

    /// Verification code timings
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Session cookie configuration
    pub session: SessionConfig,

    /// Billing webhook configuration
    #[serde(default)]
    pub webhook: WebhookConfig,

    /// Outbound mail configuration
    #[serde(default)]
    pub mail: MailConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            verification: VerificationConfig::default(),
            session: SessionConfig::default(),
            webhook: WebhookConfig::default(),
            mail: MailConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            cors: CorsConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            verification: VerificationConfig::from_env(),
            session: SessionConfig::from_env(environment),
            webhook: WebhookConfig::from_env(),
            mail: MailConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }

    /// Settings that must never reach production unchanged
    pub fn production_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if !self.environment.is_production() {
            return violations;
        }
        if self.session.is_using_default_secret() {
            violations.push("SESSION_SECRET must be set in production".to_string());
        }
        if !self.webhook.is_configured() {
            violations.push(
                "PADDLE_WEBHOOK_SECRET_KEY is not set; all webhook events will be rejected"
                    .to_string(),
            );
        }
        if self.mail.provider == MailProvider::Mock {
            violations.push("MAIL_PROVIDER=mock does not deliver any email".to_string());
        }
        violations
    }
}

/// Read and parse an environment variable, falling back to a default
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Read an environment variable, treating empty values as unset
pub(crate) fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
