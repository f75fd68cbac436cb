//! Mail Module
//!
//! Delivery of verification codes by email. The provider is picked from
//! `MailConfig`: `mock` logs and records messages, `http` posts them to a
//! JSON mail API.

use async_trait::async_trait;
use sr_core::errors::DeliveryError;
use sr_core::services::verification::CodeMailer;
use sr_shared::config::mail::{MailConfig, MailProvider};

pub mod http_mail;
pub mod mock_mail;

pub use http_mail::HttpMailService;
pub use mock_mail::MockMailService;

#[cfg(test)]
mod tests;

/// Plain-text body of a verification code email
pub fn verification_body(code: &str) -> String {
    format!("Your Verify Code Is {}", code)
}

/// Mailer selected at startup
pub enum EmailSender {
    Mock(MockMailService),
    Http(HttpMailService),
}

impl EmailSender {
    /// Provider name for logs
    pub fn provider_name(&self) -> &'static str {
        match self {
            EmailSender::Mock(_) => "mock",
            EmailSender::Http(_) => "http",
        }
    }
}

#[async_trait]
impl CodeMailer for EmailSender {
    async fn send_code(&self, to: &str, code: &str) -> Result<(), DeliveryError> {
        match self {
            EmailSender::Mock(service) => service.send_code(to, code).await,
            EmailSender::Http(service) => service.send_code(to, code).await,
        }
    }
}

/// Create the mailer described by `config`
///
/// # Errors
///
/// * `InfrastructureError::Config` - the http provider is missing its URL or key
pub fn create_mailer(config: &MailConfig) -> Result<EmailSender, crate::InfrastructureError> {
    match config.provider {
        MailProvider::Mock => {
            tracing::warn!("Using mock mail service; verification codes are not delivered");
            Ok(EmailSender::Mock(MockMailService::new(config.subject.clone())))
        }
        MailProvider::Http => Ok(EmailSender::Http(HttpMailService::new(config)?)),
    }
}
