//! Shared fixtures for API integration tests

#![allow(dead_code)]

use actix_web::web;
use std::sync::Arc;

use sr_api::AppState;
use sr_core::domain::entities::template::{Template, TemplateCategory, TemplateDetail};
use sr_core::repositories::{MockIdentityRepository, MockTemplateRepository};
use sr_core::services::{
    AuthService, CatalogService, CodeService, CodeServiceConfig, SessionManager,
};
use sr_infra::cache::InMemoryTtlStore;
use sr_infra::mail::mock_mail::MockMailService;
use sr_shared::config::{SessionConfig, WebhookConfig};

pub const TEST_SESSION_SECRET: &str = "integration-test-session-secret";
pub const TEST_WEBHOOK_SECRET: &str = "pdl_ntfset_test_secret";

pub type TestState =
    AppState<MockIdentityRepository, InMemoryTtlStore, MockMailService, MockTemplateRepository>;

pub const FREE_TEMPLATE_ID: u64 = 11;
pub const PRO_TEMPLATE_ID: u64 = 12;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub mailer: Arc<MockMailService>,
    pub identities: Arc<MockIdentityRepository>,
    pub templates: Arc<MockTemplateRepository>,
}

/// Build application state over in-memory adapters
pub fn test_context(webhook_secret: Option<&str>) -> TestContext {
    let identities = Arc::new(MockIdentityRepository::new());
    let mailer = Arc::new(MockMailService::new("Say Right Verify Code"));
    let store = Arc::new(InMemoryTtlStore::new());

    let code_service = Arc::new(CodeService::new(
        store,
        mailer.clone(),
        CodeServiceConfig::default(),
    ));
    let session = SessionConfig::new(TEST_SESSION_SECRET);
    let sessions = Arc::new(SessionManager::from_config(&session));
    let auth_service = Arc::new(AuthService::new(identities.clone(), code_service, sessions));
    let templates = Arc::new(MockTemplateRepository::new());
    let catalog_service = Arc::new(CatalogService::new(identities.clone(), templates.clone()));

    let webhook = match webhook_secret {
        Some(secret) => WebhookConfig::with_secret(secret),
        None => WebhookConfig::default(),
    };

    TestContext {
        state: web::Data::new(AppState::new(
            auth_service,
            catalog_service,
            session,
            &webhook,
        )),
        mailer,
        identities,
        templates,
    }
}

/// Seed one category holding a free and a pro template
pub async fn seed_catalog(templates: &MockTemplateRepository) {
    templates
        .insert_category(TemplateCategory {
            id: 1,
            name: "Work".to_string(),
            description: "Replies for the office".to_string(),
            icon: "briefcase".to_string(),
            sort_order: 0,
            is_active: true,
        })
        .await;

    for (id, title, is_pro) in [
        (FREE_TEMPLATE_ID, "Decline a meeting", false),
        (PRO_TEMPLATE_ID, "Push back on scope", true),
    ] {
        templates
            .insert_template(Template {
                id,
                category_id: 1,
                title: title.to_string(),
                description: format!("{title} politely"),
                tags: "work,boundaries".to_string(),
                is_pro,
                sort_order: id as i32,
                is_active: true,
            })
            .await;
        templates
            .insert_detail(TemplateDetail {
                template_id: id,
                headline: String::new(),
                summary: format!("When to {}", title.to_lowercase()),
                reply_soft: "I'd love to, but".to_string(),
                reply_neutral: "I can't this time".to_string(),
                reply_firm: "No".to_string(),
                when_not_to_use: "With your manager's manager".to_string(),
                best_practices: "Be brief\nOffer an alternative".to_string(),
            })
            .await;
    }
}

/// `ts=...;h1=...` header for `body` signed now
pub fn signature_header(secret: &str, body: &[u8]) -> String {
    let ts = chrono::Utc::now().timestamp().to_string();
    let h1 = sr_core::sign_payload(secret, &ts, body).unwrap();
    format!("ts={};h1={}", ts, h1)
}
