//! Repository interfaces for persisted domain objects.

pub mod identity;
pub mod template;

pub use identity::{IdentityRepository, MockIdentityRepository};
pub use template::{MockTemplateRepository, TemplateRepository};
