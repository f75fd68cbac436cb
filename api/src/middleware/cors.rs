//! CORS middleware configuration for cross-origin requests.
//!
//! Browser clients are served from the configured root domains and their
//! subdomains. Session cookies travel cross-origin, so credentials are
//! always supported.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use sr_shared::config::{CorsConfig, Environment};

/// Creates a CORS middleware instance configured for the current environment.
///
/// In development any origin is accepted. Elsewhere an origin must be
/// `http(s)://<domain>` or `http(s)://<sub>.<domain>` for one of the
/// configured domains.
pub fn create_cors(config: &CorsConfig, environment: Environment) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::RETRY_AFTER])
        .max_age(config.max_age)
        .supports_credentials();

    if environment.is_development() {
        tracing::info!("Configuring permissive CORS for development");
        return cors.allow_any_origin();
    }

    tracing::info!(
        domains = ?config.allowed_domains,
        "Configuring CORS for allowed domains"
    );
    let config = config.clone();
    cors.allowed_origin_fn(move |origin, _req_head| {
        origin
            .to_str()
            .map(|origin| config.is_allowed_origin(origin))
            .unwrap_or(false)
    })
}
