use actix_web::{web, HttpResponse};

use sr_core::repositories::{IdentityRepository, TemplateRepository};
use sr_core::services::verification::{CodeMailer, TtlStore};

use super::expired_session_cookie;
use crate::app::AppState;
use crate::dto::auth::LogoutResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::session::SessionContext;

/// Handler for POST /api/v1/auth/logout
///
/// Revokes the presented session token for the rest of its lifetime and
/// expires the session cookie. Other sessions of the same identity stay
/// valid.
///
/// ## Success (200 OK)
/// ```json
/// { "message": "Logged out successfully" }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: no valid session
/// - 500 Internal Server Error: the revocation could not be stored
pub async fn logout<R, S, M, T>(
    state: web::Data<AppState<R, S, M, T>>,
    session: SessionContext,
) -> HttpResponse
where
    R: IdentityRepository + 'static,
    S: TtlStore + 'static,
    M: CodeMailer + 'static,
    T: TemplateRepository + 'static,
{
    if let Err(error) = state.auth_service.revoke_session(session.identity()).await {
        return handle_domain_error(error);
    }

    tracing::info!(
        identity_id = session.identity().id,
        event = "logout",
        "Identity logged out"
    );

    HttpResponse::Ok()
        .cookie(expired_session_cookie(&state.session))
        .json(LogoutResponse {
            message: "Logged out successfully".to_string(),
        })
}
