//! Signed session tokens carried in the login cookie

mod manager;
mod verifier;


pub use manager::SessionManager;
pub use verifier::SessionVerifier;
