//! # SayRight Core
//!
//! Domain layer for the SayRight backend: verification code issuance and
//! redemption, billing webhook authentication, session tokens and the
//! identity repository contract. Storage, mail and persistence adapters live
//! in `sr_infra`; this crate only sees them through traits.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
