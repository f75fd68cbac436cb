//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management
//! - Identity repository backed by the `users` table
//! - Read-only template catalog repository

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlIdentityRepository, MySqlTemplateRepository};
