//! Authentication service module
//!
//! Ties the pieces of passwordless login together:
//! - Email validation and code issuance
//! - Code redemption, identity lookup or creation and session issuance
//! - Pro upgrades driven by verified billing events

mod service;

#[cfg(test)]
mod tests;

pub use service::{AuthService, LoginResult};
