//! Inbound webhooks from third-party providers

pub mod paddle;

pub use paddle::paddle_webhook;
