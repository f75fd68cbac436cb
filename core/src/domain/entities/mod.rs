//! Domain entities representing core business objects.

pub mod identity;
pub mod template;
pub mod verification_code;
pub mod webhook_event;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use identity::Identity;
pub use template::{Template, TemplateCategory, TemplateDetail};
pub use verification_code::{IssuedCode, CODE_LENGTH, CODE_SPACE};
pub use webhook_event::{BillingEvent, WebhookEvent};
