//! Cache configuration module

use serde::{Deserialize, Serialize};

use super::{env_opt, env_or};

/// Key prefix used by existing deployments
pub const DEFAULT_KEY_PREFIX: &str = "biz:say_right";

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL (`rediss://` enables TLS)
    pub url: String,

    /// Connection timeout in seconds
    pub connection_timeout: u64,

    /// Maximum retry attempts for transient failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base delay between retries in milliseconds (exponential backoff)
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Prefix prepended to every key, joined with ':'
    #[serde(default)]
    pub key_prefix: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            connection_timeout: 5,
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            key_prefix: Some(DEFAULT_KEY_PREFIX.to_string()),
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    ///
    /// `REDIS_KEY_PREFIX` set to an empty string disables prefixing.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let key_prefix = match std::env::var("REDIS_KEY_PREFIX") {
            Ok(prefix) if prefix.trim().is_empty() => None,
            Ok(prefix) => Some(prefix.trim().trim_end_matches(':').to_string()),
            Err(_) => defaults.key_prefix,
        };

        Self {
            url: env_opt("REDIS_URL").unwrap_or(defaults.url),
            connection_timeout: env_or("REDIS_CONNECTION_TIMEOUT", defaults.connection_timeout),
            max_retries: env_or("REDIS_MAX_RETRIES", defaults.max_retries),
            retry_delay_ms: env_or("REDIS_RETRY_DELAY_MS", defaults.retry_delay_ms),
            key_prefix,
        }
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the key prefix for all cache keys
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Disable key prefixing
    pub fn without_prefix(mut self) -> Self {
        self.key_prefix = None;
        self
    }

    /// Generate a cache key with prefix
    pub fn make_key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }

    /// Whether the URL requests a TLS connection
    pub fn uses_tls(&self) -> bool {
        self.url.starts_with("rediss://")
    }
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    100
}
