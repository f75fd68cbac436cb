//! Unit tests for identity entity

use crate::domain::entities::identity::Identity;

#[test]
fn test_new_verified_identity() {
    let identity = Identity::new_verified("U@X.com".to_string(), "u@x.com".to_string());

    assert_eq!(identity.id, 0);
    assert!(!identity.is_persisted());
    assert_eq!(identity.email, "U@X.com");
    assert_eq!(identity.email_norm, "u@x.com");
    assert!(!identity.is_pro);
    assert!(identity.email_verified_at.is_some());
    assert_eq!(identity.created_at, identity.updated_at);
}

#[test]
fn test_upgrade_to_pro_touches_updated_at() {
    let mut identity = Identity::new_verified("u@x.com".to_string(), "u@x.com".to_string());
    let before = identity.updated_at;

    identity.upgrade_to_pro();

    assert!(identity.is_pro);
    assert!(identity.updated_at >= before);
}
