//! Billing provider events delivered through the Paddle webhook.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw webhook event envelope
///
/// Every field is optional on the wire; an event without a recognised
/// `event_type` is accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Provider-assigned event id
    #[serde(default)]
    pub event_id: String,

    /// Dotted event name, e.g. `transaction.completed`
    #[serde(default)]
    pub event_type: String,

    /// RFC 3339 timestamp as sent by the provider
    #[serde(default)]
    pub occurred_at: String,

    /// Event-specific payload
    #[serde(default)]
    pub data: Value,
}

/// Events the backend reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillingEvent {
    /// A payment went through; carries the purchaser email from `custom_data` if present
    TransactionCompleted { email: Option<String> },
    /// A subscription started
    SubscriptionCreated { subscription_id: Option<String> },
    /// A subscription renewed, changed or was cancelled
    SubscriptionUpdated {
        subscription_id: Option<String>,
        status: Option<String>,
    },
    /// Anything else
    Ignored(String),
}

impl WebhookEvent {
    /// Parses an event from the raw request body
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Maps the envelope onto the events the backend handles
    pub fn classify(&self) -> BillingEvent {
        match self.event_type.as_str() {
            "transaction.completed" => BillingEvent::TransactionCompleted {
                email: self
                    .data_str(&["custom_data", "email"])
                    .filter(|e| !e.trim().is_empty()),
            },
            "subscription.created" => BillingEvent::SubscriptionCreated {
                subscription_id: self.data_str(&["id"]),
            },
            "subscription.updated" => BillingEvent::SubscriptionUpdated {
                subscription_id: self.data_str(&["id"]),
                status: self.data_str(&["status"]),
            },
            other => BillingEvent::Ignored(other.to_string()),
        }
    }

    fn data_str(&self, path: &[&str]) -> Option<String> {
        path.iter()
            .try_fold(&self.data, |value, key| value.get(key))
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}
