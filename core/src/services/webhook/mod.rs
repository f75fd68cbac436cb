//! Inbound billing webhook authentication
//!
//! Paddle signs each delivery with `Paddle-Signature: ts=<unix>;h1=<hex>`,
//! where `h1` is HMAC-SHA256 over `ts + ":" + body` keyed with the
//! notification secret.

mod authenticator;
mod signature;


pub use authenticator::{sign_payload, WebhookAuthenticator};
pub use signature::SignatureHeader;
