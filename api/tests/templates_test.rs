//! Integration tests for the template catalog routes

mod common;

use actix_web::{cookie::Cookie, http::StatusCode, test};
use serde_json::{json, Value};

use sr_api::create_app;
use sr_core::repositories::IdentityRepository;
use sr_shared::config::{CorsConfig, Environment};

use common::{seed_catalog, test_context, FREE_TEMPLATE_ID, PRO_TEMPLATE_ID};

const COOKIE_NAME: &str = "say_right_session";

macro_rules! init_app {
    ($ctx:expr) => {
        test::init_service(create_app(
            $ctx.state.clone(),
            &CorsConfig::default(),
            Environment::Development,
        ))
        .await
    };
}

/// Log `email` in and return (identity id, session token)
macro_rules! login {
    ($app:expr, $ctx:expr, $email:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/send-code")
            .set_json(json!({ "email": $email }))
            .to_request();
        assert_eq!(test::call_service(&$app, req).await.status(), StatusCode::OK);
        let code = $ctx.mailer.get_sent_code($email).unwrap();

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "email": $email, "code": code }))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let token = resp
            .response()
            .cookies()
            .find(|c| c.name() == COOKIE_NAME)
            .map(|c| c.value().to_string())
            .unwrap();
        let body: Value = test::read_body_json(resp).await;
        (body["id"].as_u64().unwrap(), token)
    }};
}

fn get(uri: &str, token: &str) -> test::TestRequest {
    test::TestRequest::get()
        .uri(uri)
        .cookie(Cookie::new(COOKIE_NAME, token.to_string()))
}

#[actix_web::test]
async fn test_list_marks_pro_templates_locked_for_free_account() {
    let ctx = test_context(None);
    seed_catalog(&ctx.templates).await;
    let app = init_app!(ctx);
    let (_, token) = login!(app, ctx, "free@x.com");

    let resp = test::call_service(&app, get("/api/v1/templates", &token).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let category = &body["categories"][0];
    assert_eq!(category["name"], "Work");
    assert_eq!(category["icon"], "briefcase");

    let templates = category["templates"].as_array().unwrap();
    assert_eq!(templates.len(), 2);
    assert_eq!(templates[0]["id"], FREE_TEMPLATE_ID);
    assert_eq!(templates[0]["is_locked"], false);
    assert_eq!(templates[0]["tags"], json!(["work", "boundaries"]));
    assert_eq!(templates[1]["id"], PRO_TEMPLATE_ID);
    assert_eq!(templates[1]["is_pro"], true);
    assert_eq!(templates[1]["is_locked"], true);
}

#[actix_web::test]
async fn test_free_template_detail() {
    let ctx = test_context(None);
    seed_catalog(&ctx.templates).await;
    let app = init_app!(ctx);
    let (_, token) = login!(app, ctx, "free@x.com");

    let uri = format!("/api/v1/templates/{}", FREE_TEMPLATE_ID);
    let resp = test::call_service(&app, get(&uri, &token).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Decline a meeting");
    assert_eq!(body["category_name"], "Work");
    assert_eq!(body["description"], "When to decline a meeting");
    assert_eq!(body["reply_firm"], "No");
    assert_eq!(body["best_practices"], json!(["Be brief", "Offer an alternative"]));
}

#[actix_web::test]
async fn test_pro_template_detail_requires_upgrade() {
    let ctx = test_context(None);
    seed_catalog(&ctx.templates).await;
    let app = init_app!(ctx);
    let (id, token) = login!(app, ctx, "free@x.com");
    let uri = format!("/api/v1/templates/{}", PRO_TEMPLATE_ID);

    let resp = test::call_service(&app, get(&uri, &token).to_request()).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "PRO_REQUIRED");

    ctx.identities.mark_pro(id).await.unwrap();

    let resp = test::call_service(&app, get(&uri, &token).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["is_pro"], true);

    let resp = test::call_service(&app, get("/api/v1/templates", &token).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["categories"][0]["templates"][1]["is_locked"], false);
}

#[actix_web::test]
async fn test_unknown_template_is_not_found() {
    let ctx = test_context(None);
    seed_catalog(&ctx.templates).await;
    let app = init_app!(ctx);
    let (_, token) = login!(app, ctx, "u@x.com");

    let resp = test::call_service(&app, get("/api/v1/templates/9999", &token).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TEMPLATE_NOT_FOUND");
}

#[actix_web::test]
async fn test_malformed_template_id_is_bad_request() {
    let ctx = test_context(None);
    let app = init_app!(ctx);
    let (_, token) = login!(app, ctx, "u@x.com");

    for uri in ["/api/v1/templates/abc", "/api/v1/templates/0", "/api/v1/templates/-1"] {
        let resp = test::call_service(&app, get(uri, &token).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[actix_web::test]
async fn test_catalog_requires_session() {
    let ctx = test_context(None);
    seed_catalog(&ctx.templates).await;
    let app = init_app!(ctx);

    for uri in ["/api/v1/templates", "/api/v1/templates/11", "/api/v1/templates/abc"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }

    let resp = test::call_service(&app, get("/api/v1/templates", "forged").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
