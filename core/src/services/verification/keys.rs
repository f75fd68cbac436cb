//! Store key namespaces
//!
//! The deployment-wide prefix is added by the store adapter, not here.

/// `code:<code>` maps a live code to the identity it was issued for
pub fn code_key(code: &str) -> String {
    format!("code:{}", code)
}

/// `verify:<identity>` maps an identity to its live code
pub fn verify_key(identity: &str) -> String {
    format!("verify:{}", identity)
}

/// `send:<identity>` marks an identity as cooling down
pub fn send_key(identity: &str) -> String {
    format!("send:{}", identity)
}

/// `session_revoked:<jti>` marks a logged-out session token
pub fn revoked_session_key(session_id: &str) -> String {
    format!("session_revoked:{}", session_id)
}
