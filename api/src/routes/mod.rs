pub mod auth;
pub mod templates;
pub mod webhooks;
