//! Value objects representing immutable domain concepts.

pub mod email_identity;
pub mod session_identity;

// Re-export commonly used types
pub use email_identity::EmailIdentity;
pub use session_identity::{SessionClaims, SessionIdentity};
