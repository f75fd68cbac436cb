//! Code issuance and redemption over the in-process adapters
//!
//! The same flow runs against Redis when `REDIS_URL` is set and the ignored
//! tests are enabled.

use std::sync::Arc;
use std::time::Duration;

use sr_core::domain::value_objects::EmailIdentity;
use sr_core::errors::AuthError;
use sr_core::services::verification::{CodeService, CodeServiceConfig, TtlStore};
use sr_infra::cache::{CacheConfig, InMemoryTtlStore, RedisClient, RedisTtlStore};
use sr_infra::mail::MockMailService;

fn email(s: &str) -> EmailIdentity {
    EmailIdentity::parse(s).unwrap()
}

async fn issue_limit_redeem<S: TtlStore>(store: Arc<S>, address: &str) {
    let mailer = Arc::new(MockMailService::new("Say Right Verify Code"));
    let service = CodeService::new(store, mailer.clone(), CodeServiceConfig::default());
    let identity = email(address);

    let issued = service.issue_code(&identity).await.unwrap();
    assert_eq!(
        mailer.get_sent_code(identity.as_str()),
        Some(issued.code.clone())
    );

    match service.issue_code(&identity).await.unwrap_err() {
        AuthError::RateLimited { retry_after } => assert!((1..=60).contains(&retry_after)),
        other => panic!("Expected rate limit, got {other:?}"),
    }

    assert!(service.verify_code(&identity, &issued.code).await.unwrap());
    assert!(!service.verify_code(&identity, &issued.code).await.unwrap());
}

#[tokio::test]
async fn test_flow_with_memory_store() {
    issue_limit_redeem(Arc::new(InMemoryTtlStore::new()), "flow@example.com").await;
}

#[tokio::test]
async fn test_expired_code_with_memory_store() {
    let store = Arc::new(InMemoryTtlStore::new());
    let mailer = Arc::new(MockMailService::new("Say Right Verify Code"));
    let config = CodeServiceConfig {
        code_ttl: Duration::from_millis(50),
        ..CodeServiceConfig::default()
    };
    let service = CodeService::new(store, mailer, config);
    let identity = email("late@example.com");

    let issued = service.issue_code(&identity).await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert!(!service.verify_code(&identity, &issued.code).await.unwrap());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_issuance_has_one_winner() {
    let store = Arc::new(InMemoryTtlStore::new());
    let mailer = Arc::new(MockMailService::new("Say Right Verify Code"));
    let service = Arc::new(CodeService::new(
        store,
        mailer.clone(),
        CodeServiceConfig::default(),
    ));

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.issue_code(&email("race@example.com")).await })
        })
        .collect();

    let mut issued = 0;
    let mut limited = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => issued += 1,
            Err(AuthError::RateLimited { .. }) => limited += 1,
            Err(other) => panic!("Unexpected error: {other:?}"),
        }
    }

    assert_eq!(issued, 1);
    assert_eq!(limited, 9);
    assert_eq!(mailer.sent_count("race@example.com"), 1);
}

#[tokio::test]
#[ignore] // Requires actual Redis server
async fn test_flow_with_redis_store() {
    let config = CacheConfig::new(
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
    )
    .with_prefix("sr_test");
    let client = RedisClient::new(&config).await.unwrap();
    let store = Arc::new(RedisTtlStore::new(client, &config));

    let address = format!(
        "redis-{}@example.com",
        chrono::Utc::now().timestamp_millis()
    );
    issue_limit_redeem(store, &address).await;
}
