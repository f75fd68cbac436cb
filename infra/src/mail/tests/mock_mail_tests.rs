//! Tests for the mock mail service and mailer selection

use sr_core::services::verification::CodeMailer;
use sr_shared::config::mail::{MailConfig, MailProvider};

use crate::mail::{create_mailer, verification_body, EmailSender, MockMailService};
use crate::InfrastructureError;

#[tokio::test]
async fn test_mock_records_latest_code() {
    let mailer = MockMailService::new("Say Right Verify Code");

    mailer.send_code("u@x.com", "111111").await.unwrap();
    mailer.send_code("u@x.com", "222222").await.unwrap();

    assert_eq!(mailer.get_sent_code("u@x.com").as_deref(), Some("222222"));
    assert_eq!(mailer.sent_count("u@x.com"), 2);
    assert_eq!(mailer.get_sent_code("other@x.com"), None);
    assert_eq!(mailer.sent_count("other@x.com"), 0);
}

#[test]
fn test_verification_body() {
    assert_eq!(verification_body("012345"), "Your Verify Code Is 012345");
}

#[tokio::test]
async fn test_create_mock_mailer() {
    let mailer = create_mailer(&MailConfig::default()).unwrap();

    assert!(matches!(mailer, EmailSender::Mock(_)));
    assert_eq!(mailer.provider_name(), "mock");
    mailer.send_code("u@x.com", "123456").await.unwrap();
}

#[test]
fn test_http_mailer_requires_credentials() {
    let config = MailConfig {
        provider: MailProvider::Http,
        api_url: Some("https://mail.example.com/send".to_string()),
        ..MailConfig::default()
    };

    assert!(matches!(
        create_mailer(&config),
        Err(InfrastructureError::Config(_))
    ));

    let config = MailConfig {
        provider: MailProvider::Http,
        api_key: Some("key".to_string()),
        ..MailConfig::default()
    };
    assert!(matches!(
        create_mailer(&config),
        Err(InfrastructureError::Config(_))
    ));
}

#[test]
fn test_create_http_mailer() {
    let config = MailConfig {
        provider: MailProvider::Http,
        api_url: Some("https://mail.example.com/send".to_string()),
        api_key: Some("key".to_string()),
        ..MailConfig::default()
    };

    let mailer = create_mailer(&config).unwrap();
    assert_eq!(mailer.provider_name(), "http");
}
