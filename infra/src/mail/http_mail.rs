//! HTTP mail API client
//!
//! Posts a JSON message to the configured endpoint with a bearer key.
//! Server errors, throttling and network failures are retried with
//! exponential backoff; other client errors are not.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use sr_core::errors::DeliveryError;
use sr_core::services::verification::CodeMailer;
use sr_shared::config::mail::MailConfig;
use sr_shared::email::mask_email;

use super::verification_body;
use crate::InfrastructureError;

const DEFAULT_RETRY_DELAY_MS: u64 = 500;

/// Outbound message payload
#[derive(Debug, Serialize)]
struct OutboundMail<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: String,
}

/// Mail service backed by an HTTP API
pub struct HttpMailService {
    client: Client,
    api_url: String,
    api_key: String,
    from_address: String,
    subject: String,
    max_retries: u32,
    retry_delay_ms: u64,
}

impl HttpMailService {
    /// Create a new HTTP mail service
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        let api_url = config
            .api_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| InfrastructureError::Config("MAIL_API_URL not set".to_string()))?;
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| InfrastructureError::Config("MAIL_API_KEY not set".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs.max(1)))
            .build()?;

        info!(
            api_url = %api_url,
            from = %config.from_address,
            "HTTP mail service initialized"
        );

        Ok(Self {
            client,
            api_url,
            api_key,
            from_address: config.from_address.clone(),
            subject: config.subject.clone(),
            max_retries: config.max_retries.max(1),
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
        })
    }

    /// Override the initial backoff delay
    pub fn with_retry_delay(mut self, retry_delay_ms: u64) -> Self {
        self.retry_delay_ms = retry_delay_ms;
        self
    }

    /// Send one message with retry logic
    async fn send_with_retry(&self, to: &str, code: &str) -> Result<(), DeliveryError> {
        let payload = OutboundMail {
            from: &self.from_address,
            to,
            subject: &self.subject,
            text: verification_body(code),
        };

        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.retry_delay_ms);

        loop {
            attempts += 1;
            debug!(
                "Sending mail attempt {}/{} to {}",
                attempts,
                self.max_retries,
                mask_email(to)
            );

            let outcome = self
                .client
                .post(&self.api_url)
                .bearer_auth(&self.api_key)
                .json(&payload)
                .send()
                .await;

            let failure = match outcome {
                Ok(response) if response.status().is_success() => {
                    info!(
                        to = %mask_email(to),
                        provider = "http",
                        event = "mail_sent",
                        "Verification email sent"
                    );
                    return Ok(());
                }
                Ok(response) => {
                    let status = response.status();
                    let body = response.text().await.unwrap_or_default();
                    if !is_retriable_status(status) {
                        error!(
                            to = %mask_email(to),
                            status = status.as_u16(),
                            "Mail API rejected the message: {}",
                            body
                        );
                        return Err(DeliveryError::Rejected {
                            message: format!("mail API returned {}", status),
                        });
                    }
                    format!("mail API returned {}", status)
                }
                Err(e) => format!("mail API unreachable: {}", e),
            };

            if attempts >= self.max_retries {
                error!(
                    to = %mask_email(to),
                    attempts = attempts,
                    "Failed to send mail: {}",
                    failure
                );
                return Err(DeliveryError::Unavailable { message: failure });
            }

            warn!(
                "Mail delivery failed (attempt {}/{}): {}. Retrying in {:?}...",
                attempts, self.max_retries, failure, delay
            );
            tokio::time::sleep(delay).await;
            delay *= 2;
        }
    }
}

#[async_trait]
impl CodeMailer for HttpMailService {
    async fn send_code(&self, to: &str, code: &str) -> Result<(), DeliveryError> {
        self.send_with_retry(to, code).await
    }
}

/// Throttling and server errors are worth another attempt
pub(crate) fn is_retriable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
        || status == StatusCode::REQUEST_TIMEOUT
        || status.is_server_error()
}
