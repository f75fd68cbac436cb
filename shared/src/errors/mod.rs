//! JSON error body returned by every failing endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Error body: a stable machine code, a human message and optional details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (field errors, retry hints, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }

    /// Attach the seconds a client must wait before retrying
    pub fn with_retry_after(self, seconds: u64) -> Self {
        self.add_detail("retry_after", seconds)
    }

    /// Attach the validation messages for one request field
    pub fn with_field_errors(self, field: impl Into<String>, messages: Vec<String>) -> Self {
        self.add_detail(field, messages)
    }

    /// `details.retry_after`, if present
    pub fn retry_after(&self) -> Option<u64> {
        self.details
            .as_ref()
            .and_then(|details| details.get("retry_after"))
            .and_then(serde_json::Value::as_u64)
    }
}

/// Error codes used across the application
pub mod error_codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const FORBIDDEN: &str = "FORBIDDEN";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const RATE_LIMIT_EXCEEDED: &str = "RATE_LIMIT_EXCEEDED";
    pub const VERIFICATION_CODE_INVALID: &str = "VERIFICATION_CODE_INVALID";
    pub const SIGNATURE_MISSING: &str = "SIGNATURE_MISSING";
    pub const SIGNATURE_INVALID: &str = "SIGNATURE_INVALID";
    pub const PAYLOAD_INVALID: &str = "PAYLOAD_INVALID";
    pub const PRO_REQUIRED: &str = "PRO_REQUIRED";
    pub const TEMPLATE_NOT_FOUND: &str = "TEMPLATE_NOT_FOUND";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_detail_skips_none_until_used() {
        let plain = ErrorResponse::new(error_codes::NOT_FOUND, "missing");
        let json = serde_json::to_value(&plain).unwrap();
        assert!(json.get("details").is_none());

        let detailed = plain.with_retry_after(42);
        assert_eq!(detailed.retry_after(), Some(42));
        let details = detailed.details.unwrap();
        assert_eq!(details["retry_after"], serde_json::json!(42));
    }

    #[test]
    fn test_field_errors_serialize_as_lists() {
        let body = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
            .with_field_errors("email", vec!["length".to_string()]);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["error"], "VALIDATION_ERROR");
        assert_eq!(json["details"]["email"], serde_json::json!(["length"]));
        assert_eq!(body.retry_after(), None);
    }
}
