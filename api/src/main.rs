use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use sr_api::config::{check_production, init_tracing};
use sr_api::{create_app, AppState};
use sr_core::services::auth::AuthService;
use sr_core::services::catalog::CatalogService;
use sr_core::services::session::SessionManager;
use sr_core::services::verification::{CodeService, CodeServiceConfig};
use sr_infra::cache::{RedisClient, RedisTtlStore};
use sr_infra::database::{DatabasePool, MySqlIdentityRepository, MySqlTemplateRepository};
use sr_infra::mail::create_mailer;
use sr_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);
    check_production(&config)?;

    tracing::info!(
        environment = ?config.environment,
        "Starting SayRight API Server"
    );

    let redis = RedisClient::new(&config.cache)
        .await
        .context("failed to connect to Redis")?;
    let store = Arc::new(RedisTtlStore::new(redis, &config.cache));

    let database = DatabasePool::new(&config.database)
        .await
        .context("failed to connect to MySQL")?;
    let identities = Arc::new(MySqlIdentityRepository::new(database.pool().clone()));
    let templates = Arc::new(MySqlTemplateRepository::new(database.pool().clone()));

    let mailer = Arc::new(create_mailer(&config.mail).context("failed to configure mail")?);
    tracing::info!(provider = mailer.provider_name(), "Mail service ready");

    let code_service = Arc::new(CodeService::new(
        store,
        mailer,
        CodeServiceConfig::from(&config.verification),
    ));
    let sessions = Arc::new(SessionManager::from_config(&config.session));
    let auth_service = Arc::new(AuthService::new(
        identities.clone(),
        code_service,
        sessions,
    ));
    let catalog_service = Arc::new(CatalogService::new(identities, templates));

    let app_state = web::Data::new(AppState::new(
        auth_service,
        catalog_service,
        config.session.clone(),
        &config.webhook,
    ));

    let bind_address = config.server.bind_address();
    tracing::info!("Server will bind to: {}", bind_address);

    let cors = config.cors.clone();
    let environment = config.environment;
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &cors, environment));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;
    Ok(())
}
