use actix_web::{web, HttpResponse};
use validator::Validate;

use sr_core::repositories::{IdentityRepository, TemplateRepository};
use sr_core::services::verification::{CodeMailer, TtlStore};

use super::session_cookie;
use crate::app::AppState;
use crate::dto::auth::{IdentityResponse, LoginRequest};
use crate::handlers::error::{handle_domain_error, validation_error_response};

/// Handler for POST /api/v1/auth/login
///
/// Redeems a verification code. On success the session cookie is set and
/// the identity is returned, creating it on first login.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "code": "123456" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: malformed email
/// - 401 Unauthorized: wrong, expired, reused or never-sent code
/// - 500 Internal Server Error: store or database failure
pub async fn login<R, S, M, T>(
    state: web::Data<AppState<R, S, M, T>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    R: IdentityRepository + 'static,
    S: TtlStore + 'static,
    M: CodeMailer + 'static,
    T: TemplateRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.auth_service.login(&request.email, &request.code).await {
        Ok(result) => HttpResponse::Ok()
            .cookie(session_cookie(&state.session, result.session_token))
            .json(IdentityResponse::from(result.identity)),
        Err(error) => handle_domain_error(error),
    }
}
