pub mod auth;
pub mod error;
pub mod templates;
pub mod webhook;

pub use auth::*;
pub use error::*;
pub use templates::*;
pub use webhook::*;
