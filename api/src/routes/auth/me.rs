use actix_web::{web, HttpResponse};

use sr_core::repositories::{IdentityRepository, TemplateRepository};
use sr_core::services::verification::{CodeMailer, TtlStore};

use crate::app::AppState;
use crate::dto::auth::IdentityResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::session::SessionContext;

/// Handler for GET /api/v1/auth/me
///
/// Returns the identity behind the current session.
pub async fn me<R, S, M, T>(
    state: web::Data<AppState<R, S, M, T>>,
    session: SessionContext,
) -> HttpResponse
where
    R: IdentityRepository + 'static,
    S: TtlStore + 'static,
    M: CodeMailer + 'static,
    T: TemplateRepository + 'static,
{
    match state.auth_service.current_identity(session.identity()).await {
        Ok(identity) => HttpResponse::Ok().json(IdentityResponse::from(identity)),
        Err(error) => handle_domain_error(error),
    }
}
