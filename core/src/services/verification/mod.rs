//! Verification code service for passwordless email login
//!
//! This module provides the code workflow:
//! - Per-identity send cooldown backed by an atomic store lock
//! - Globally unique 6-digit codes with bounded retries on collision
//! - Single-use redemption with constant-time comparison
//! - Delivery through a pluggable mailer

mod config;
mod generator;
pub mod keys;
mod service;
mod traits;

#[cfg(test)]
pub(crate) mod tests;

pub use config::{CodeServiceConfig, MAX_GENERATION_ATTEMPTS};
pub use generator::OsCodeGenerator;
pub use service::CodeService;
pub use traits::{CodeGenerator, CodeMailer, TtlStore};
