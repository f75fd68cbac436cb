//! Unit tests for the authentication service

use serde_json::json;

use crate::domain::entities::webhook_event::WebhookEvent;
use crate::domain::value_objects::{EmailIdentity, SessionIdentity};
use crate::errors::{AuthError, DomainError};
use crate::repositories::IdentityRepository;
use crate::services::verification::keys::revoked_session_key;

use super::mocks::fixture;

#[tokio::test]
async fn test_send_code_rejects_malformed_email() {
    let f = fixture();

    let err = f.service.send_code("not-an-email").await.unwrap_err();

    assert!(matches!(err, DomainError::Validation { .. }));
    assert_eq!(f.mailer.sent_count(), 0);
}

#[tokio::test]
async fn test_send_code_surfaces_rate_limit() {
    let f = fixture();

    f.service.send_code("u@x.com").await.unwrap();
    let err = f.service.send_code("U@x.com").await.unwrap_err();

    assert!(matches!(
        err,
        DomainError::Auth(AuthError::RateLimited { retry_after }) if retry_after > 0
    ));
}

#[tokio::test]
async fn test_login_creates_identity_and_session() {
    let f = fixture();
    f.service.send_code("New@X.com").await.unwrap();
    let code = f.mailer.last_code_for("new@x.com").unwrap();

    let result = f.service.login("new@x.com", &code).await.unwrap();

    assert!(result.identity.id > 0);
    assert_eq!(result.identity.email, "new@x.com");
    assert_eq!(result.identity.email_norm, "new@x.com");
    assert!(result.identity.email_verified_at.is_some());
    assert!(!result.identity.is_pro);

    let session = f.sessions.verify(&result.session_token).unwrap();
    assert_eq!(session.id, result.identity.id);
    assert_eq!(f.repository.len().await, 1);
}

#[tokio::test]
async fn test_login_reuses_existing_identity() {
    let f = fixture();

    f.service.send_code("u@x.com").await.unwrap();
    let first_code = f.mailer.last_code_for("u@x.com").unwrap();
    let first = f.service.login("u@x.com", &first_code).await.unwrap();

    f.store.expire("send:u@x.com");
    f.service.send_code("u@x.com").await.unwrap();
    let second_code = f.mailer.last_code_for("u@x.com").unwrap();
    let second = f.service.login("u@x.com", &second_code).await.unwrap();

    assert_eq!(first.identity.id, second.identity.id);
    assert_eq!(f.repository.len().await, 1);
}

#[tokio::test]
async fn test_login_with_wrong_or_unsent_code_is_invalid() {
    let f = fixture();

    let never_sent = f.service.login("u@x.com", "123456").await.unwrap_err();
    assert!(matches!(
        never_sent,
        DomainError::Auth(AuthError::InvalidVerificationCode)
    ));

    f.service.send_code("u@x.com").await.unwrap();
    let code = f.mailer.last_code_for("u@x.com").unwrap();
    let wrong = if code == "999999" { "000000" } else { "999999" };
    let err = f.service.login("u@x.com", wrong).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidVerificationCode)));

    assert!(f.repository.is_empty().await);
}

#[tokio::test]
async fn test_login_code_is_single_use() {
    let f = fixture();
    f.service.send_code("u@x.com").await.unwrap();
    let code = f.mailer.last_code_for("u@x.com").unwrap();

    f.service.login("u@x.com", &code).await.unwrap();
    let replay = f.service.login("u@x.com", &code).await.unwrap_err();

    assert!(matches!(replay, DomainError::Auth(AuthError::InvalidVerificationCode)));
}

#[tokio::test]
async fn test_current_identity() {
    let f = fixture();
    let email = EmailIdentity::parse("u@x.com").unwrap();
    let identity = f.service.find_or_create_identity(&email).await.unwrap();

    let session = SessionIdentity {
        id: identity.id,
        email: identity.email_norm.clone(),
        session_id: "jti-1".to_string(),
        expires_at: chrono::Utc::now().timestamp() + 3600,
    };
    assert_eq!(f.service.current_identity(&session).await.unwrap(), identity);

    let stale = SessionIdentity {
        id: identity.id + 1,
        email: "gone@x.com".to_string(),
        session_id: "jti-2".to_string(),
        expires_at: chrono::Utc::now().timestamp() + 3600,
    };
    assert!(matches!(
        f.service.current_identity(&stale).await.unwrap_err(),
        DomainError::Auth(AuthError::Unauthenticated)
    ));
}

#[tokio::test]
async fn test_upgrade_to_pro() {
    let f = fixture();
    let email = EmailIdentity::parse("buyer@x.com").unwrap();
    let identity = f.service.find_or_create_identity(&email).await.unwrap();

    let upgraded = f.service.upgrade_to_pro(" Buyer@X.com").await.unwrap();
    assert!(upgraded.is_pro);

    let stored = f.repository.find_by_id(identity.id).await.unwrap().unwrap();
    assert!(stored.is_pro);

    // Idempotent
    assert!(f.service.upgrade_to_pro("buyer@x.com").await.unwrap().is_pro);
}

#[tokio::test]
async fn test_upgrade_unknown_identity_is_not_found() {
    let f = fixture();

    assert!(matches!(
        f.service.upgrade_to_pro("ghost@x.com").await.unwrap_err(),
        DomainError::NotFound { .. }
    ));
}

#[tokio::test]
async fn test_apply_transaction_completed() {
    let f = fixture();
    let email = EmailIdentity::parse("buyer@x.com").unwrap();
    f.service.find_or_create_identity(&email).await.unwrap();

    let event: WebhookEvent = serde_json::from_value(json!({
        "event_id": "evt_1",
        "event_type": "transaction.completed",
        "data": { "custom_data": { "email": "buyer@x.com" } }
    }))
    .unwrap();

    let changed = f.service.apply_billing_event(&event).await.unwrap();
    assert!(changed.unwrap().is_pro);
}

#[tokio::test]
async fn test_apply_other_events_changes_nothing() {
    let f = fixture();

    for event_type in ["subscription.created", "subscription.updated", "customer.created"] {
        let event: WebhookEvent = serde_json::from_value(json!({
            "event_type": event_type,
            "data": { "id": "sub_1" }
        }))
        .unwrap();
        assert!(f.service.apply_billing_event(&event).await.unwrap().is_none());
    }

    let unattributed: WebhookEvent = serde_json::from_value(json!({
        "event_type": "transaction.completed",
        "data": {}
    }))
    .unwrap();
    assert!(f.service.apply_billing_event(&unattributed).await.unwrap().is_none());
}

#[tokio::test]
async fn test_revoked_session_no_longer_authenticates() {
    let f = fixture();
    f.service.send_code("u@x.com").await.unwrap();
    let code = f.mailer.last_code_for("u@x.com").unwrap();
    let login = f.service.login("u@x.com", &code).await.unwrap();

    let session = f
        .service
        .authenticate_session(&login.session_token)
        .await
        .unwrap();
    assert_eq!(session.id, login.identity.id);

    f.service.revoke_session(&session).await.unwrap();

    assert_eq!(
        f.service
            .authenticate_session(&login.session_token)
            .await
            .unwrap_err(),
        AuthError::Unauthenticated
    );
    assert!(f
        .store
        .peek(&revoked_session_key(&session.session_id))
        .is_some());
}

#[tokio::test]
async fn test_revoking_one_session_keeps_others() {
    let f = fixture();
    let email = EmailIdentity::parse("u@x.com").unwrap();
    let identity = f.service.find_or_create_identity(&email).await.unwrap();
    let first = f.sessions.issue(&identity).unwrap();
    let second = f.sessions.issue(&identity).unwrap();

    let session = f.service.authenticate_session(&first).await.unwrap();
    f.service.revoke_session(&session).await.unwrap();

    assert!(f.service.authenticate_session(&first).await.is_err());
    assert!(f.service.authenticate_session(&second).await.is_ok());
}

#[tokio::test]
async fn test_expired_session_revocation_is_noop() {
    let f = fixture();
    let session = SessionIdentity {
        id: 1,
        email: "u@x.com".to_string(),
        session_id: "old".to_string(),
        expires_at: chrono::Utc::now().timestamp() - 10,
    };

    f.service.revoke_session(&session).await.unwrap();

    assert!(f.store.peek(&revoked_session_key("old")).is_none());
}

#[tokio::test]
async fn test_revocation_check_fails_closed_on_store_error() {
    let f = fixture();
    let email = EmailIdentity::parse("u@x.com").unwrap();
    let identity = f.service.find_or_create_identity(&email).await.unwrap();
    let token = f.sessions.issue(&identity).unwrap();

    f.store.set_failing(true);

    assert_eq!(
        f.service.authenticate_session(&token).await.unwrap_err(),
        AuthError::Unauthenticated
    );
}
