//! Business services containing domain logic and use cases.

pub mod auth;
pub mod catalog;
pub mod session;
pub mod verification;
pub mod webhook;

// Re-export commonly used types
pub use auth::{AuthService, LoginResult};
pub use catalog::{CatalogService, CategoryView, TemplateDetailView, TemplateSummary};
pub use session::{SessionManager, SessionVerifier};
pub use verification::{
    CodeGenerator, CodeMailer, CodeService, CodeServiceConfig, OsCodeGenerator, TtlStore,
};
pub use webhook::{sign_payload, SignatureHeader, WebhookAuthenticator};
