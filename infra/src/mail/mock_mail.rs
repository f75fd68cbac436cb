//! Mock mail service for development and testing
//!
//! Nothing leaves the process. Each delivered code is kept in memory so that
//! tests can complete a login flow.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use sr_core::errors::DeliveryError;
use sr_core::services::verification::CodeMailer;
use sr_shared::email::mask_email;

/// Mail service that records messages instead of sending them
#[derive(Debug, Default)]
pub struct MockMailService {
    subject: String,
    sent: Mutex<HashMap<String, Vec<String>>>,
}

impl MockMailService {
    /// Create a mock mail service
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            sent: Mutex::new(HashMap::new()),
        }
    }

    /// Most recent code delivered to `email`
    pub fn get_sent_code(&self, email: &str) -> Option<String> {
        self.sent
            .lock()
            .ok()?
            .get(email)
            .and_then(|codes| codes.last().cloned())
    }

    /// Number of messages delivered to `email`
    pub fn sent_count(&self, email: &str) -> usize {
        self.sent
            .lock()
            .map(|sent| sent.get(email).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

#[async_trait]
impl CodeMailer for MockMailService {
    async fn send_code(&self, to: &str, code: &str) -> Result<(), DeliveryError> {
        let mut sent = self.sent.lock().map_err(|_| DeliveryError::Unavailable {
            message: "mock mailbox poisoned".to_string(),
        })?;
        sent.entry(to.to_string()).or_default().push(code.to_string());

        tracing::info!(
            to = %mask_email(to),
            subject = %self.subject,
            provider = "mock",
            event = "mail_sent",
            "Verification email recorded"
        );
        Ok(())
    }
}
