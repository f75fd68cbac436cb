//! Outbound mail configuration

use serde::{Deserialize, Serialize};

use super::{env_opt, env_or};

/// Mail delivery provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Log messages instead of sending them
    #[default]
    Mock,
    /// JSON HTTP mail API
    Http,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(MailProvider::Mock),
            "http" | "api" => Ok(MailProvider::Http),
            _ => Err(format!("Invalid mail provider: {}", s)),
        }
    }
}

/// Mail service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Which provider delivers mail
    pub provider: MailProvider,

    /// Endpoint of the mail API (http provider)
    #[serde(default)]
    pub api_url: Option<String>,

    /// Bearer credential for the mail API (http provider)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Sender address
    pub from_address: String,

    /// Subject line for verification code emails
    pub subject: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// Maximum delivery attempts
    pub max_retries: u32,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::Mock,
            api_url: None,
            api_key: None,
            from_address: String::from("no-reply@mail.simpleaiwork.com"),
            subject: String::from("Say Right Verify Code"),
            request_timeout_secs: 10,
            max_retries: 2,
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env_or("MAIL_PROVIDER", defaults.provider),
            api_url: env_opt("MAIL_API_URL"),
            api_key: env_opt("MAIL_API_KEY"),
            from_address: env_opt("MAIL_FROM_ADDRESS").unwrap_or(defaults.from_address),
            subject: env_opt("MAIL_SUBJECT").unwrap_or(defaults.subject),
            request_timeout_secs: env_or("MAIL_REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs),
            max_retries: env_or("MAIL_MAX_RETRIES", defaults.max_retries).max(1),
        }
    }
}
