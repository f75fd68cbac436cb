use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use sr_core::domain::entities::identity::Identity;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendCodeRequest {
    /// Address to send the code to; normalized server-side
    #[validate(length(min = 3, max = 254, message = "Email must be 3 to 254 characters"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 3, max = 254, message = "Email must be 3 to 254 characters"))]
    pub email: String,

    /// Code from the email; a malformed code fails like a wrong one
    #[validate(length(max = 64))]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendCodeResponse {
    pub message: String,
    pub resend_after: u64, // seconds until can resend
}

/// Identity record returned by login and `/auth/me`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityResponse {
    pub id: u64,
    pub email: String,
    pub is_pro: bool,
    pub email_verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Identity> for IdentityResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email,
            is_pro: identity.is_pro,
            email_verified_at: identity.email_verified_at,
            created_at: identity.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}
