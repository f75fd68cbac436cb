//! Application state and factory
//!
//! `create_app` builds the complete Actix-web application from an
//! `AppState`. The binary and the integration tests share it.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse,
};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use sr_core::repositories::{IdentityRepository, TemplateRepository};
use sr_core::services::auth::AuthService;
use sr_core::services::catalog::CatalogService;
use sr_core::services::session::SessionVerifier;
use sr_core::services::verification::{CodeMailer, TtlStore};
use sr_core::services::webhook::WebhookAuthenticator;
use sr_shared::config::{CorsConfig, Environment, SessionConfig, WebhookConfig};

use crate::dto::error_codes;
use crate::dto::error_response;
use crate::handlers::error::json_error_handler;
use crate::middleware::{cors::create_cors, session::SessionAuth};
use crate::routes::{auth, templates, webhooks};

/// Application state that holds shared services
pub struct AppState<R, S, M, T>
where
    R: IdentityRepository,
    S: TtlStore,
    M: CodeMailer,
    T: TemplateRepository,
{
    pub auth_service: Arc<AuthService<R, S, M>>,
    pub catalog_service: Arc<CatalogService<R, T>>,
    pub webhook_authenticator: Arc<WebhookAuthenticator>,
    /// Session cookie settings
    pub session: SessionConfig,
    /// Header carrying the webhook signature
    pub signature_header: String,
}

impl<R, S, M, T> AppState<R, S, M, T>
where
    R: IdentityRepository,
    S: TtlStore,
    M: CodeMailer,
    T: TemplateRepository,
{
    pub fn new(
        auth_service: Arc<AuthService<R, S, M>>,
        catalog_service: Arc<CatalogService<R, T>>,
        session: SessionConfig,
        webhook: &WebhookConfig,
    ) -> Self {
        Self {
            auth_service,
            catalog_service,
            webhook_authenticator: Arc::new(WebhookAuthenticator::from_config(webhook)),
            session,
            signature_header: webhook.signature_header.clone(),
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<R, S, M, T>(
    app_state: web::Data<AppState<R, S, M, T>>,
    cors: &CorsConfig,
    environment: Environment,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    R: IdentityRepository + 'static,
    S: TtlStore + 'static,
    M: CodeMailer + 'static,
    T: TemplateRepository + 'static,
{
    let sessions: Arc<dyn SessionVerifier> = app_state.auth_service.clone();
    let session_auth = SessionAuth::new(sessions, app_state.session.cookie_name.clone());

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Middleware (last wrapped runs first: tracing, then CORS)
        .wrap(create_cors(cors, environment))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .route("/ping", web::get().to(ping))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .wrap(session_auth.clone())
                        .route("/send-code", web::post().to(auth::send_code::<R, S, M, T>))
                        .route("/login", web::post().to(auth::login::<R, S, M, T>))
                        .route("/me", web::get().to(auth::me::<R, S, M, T>))
                        .route("/logout", web::post().to(auth::logout::<R, S, M, T>)),
                )
                .service(
                    web::scope("/templates")
                        .wrap(session_auth)
                        .route("", web::get().to(templates::list_templates::<R, S, M, T>))
                        .route(
                            "/{id}",
                            web::get().to(templates::template_detail::<R, S, M, T>),
                        ),
                )
                .service(
                    web::scope("/webhooks").route(
                        "/paddle",
                        web::post().to(webhooks::paddle_webhook::<R, S, M, T>),
                    ),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "say-right-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn ping() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "message": "pong" }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    error_response(
        actix_web::http::StatusCode::NOT_FOUND,
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    )
}
