//! Server configuration module

use serde::{Deserialize, Serialize};

use super::env_or;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Maximum JSON payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            workers: 0,
            max_payload_size: default_max_payload_size(),
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: env_or("SERVER_PORT", defaults.port),
            workers: env_or("SERVER_WORKERS", defaults.workers),
            max_payload_size: env_or("SERVER_MAX_PAYLOAD_SIZE", defaults.max_payload_size),
        }
    }

    /// Socket address string for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
///
/// Origins are allowed when their host is one of `allowed_domains` or a
/// subdomain of one, over either http or https.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Root domains whose origins (and subdomains) are allowed
    #[serde(default = "default_allowed_domains")]
    pub allowed_domains: Vec<String>,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_domains: default_allowed_domains(),
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let allowed_domains = std::env::var("CORS_ALLOWED_DOMAINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_lowercase())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_else(|_| default_allowed_domains());

        Self {
            allowed_domains,
            max_age: env_or("CORS_MAX_AGE", default_max_age()),
        }
    }

    /// Check whether a request origin is allowed
    pub fn is_allowed_origin(&self, origin: &str) -> bool {
        let host = match origin
            .strip_prefix("https://")
            .or_else(|| origin.strip_prefix("http://"))
        {
            Some(rest) => rest.split(':').next().unwrap_or(rest).to_lowercase(),
            None => return false,
        };

        self.allowed_domains.iter().any(|domain| {
            host == *domain
                || host
                    .strip_suffix(domain.as_str())
                    .map_or(false, |prefix| prefix.ends_with('.'))
        })
    }
}

fn default_max_payload_size() -> usize {
    256 * 1024
}

fn default_allowed_domains() -> Vec<String> {
    vec![String::from("simpleaiwork.com")]
}

fn default_max_age() -> usize {
    3600
}
