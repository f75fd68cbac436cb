use actix_web::{web, HttpResponse};
use validator::Validate;

use sr_core::repositories::{IdentityRepository, TemplateRepository};
use sr_core::services::verification::{CodeMailer, TtlStore};
use sr_shared::email::mask_email;

use crate::app::AppState;
use crate::dto::auth::{SendCodeRequest, SendCodeResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};

/// Handler for POST /api/v1/auth/send-code
///
/// Sends a verification code to the given email address.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Verification code sent",
///     "resend_after": 60
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: malformed email
/// - 429 Too Many Requests: within the resend cooldown, with `Retry-After`
/// - 500 Internal Server Error: store or mail provider failure
pub async fn send_code<R, S, M, T>(
    state: web::Data<AppState<R, S, M, T>>,
    request: web::Json<SendCodeRequest>,
) -> HttpResponse
where
    R: IdentityRepository + 'static,
    S: TtlStore + 'static,
    M: CodeMailer + 'static,
    T: TemplateRepository + 'static,
{
    if let Err(errors) = request.validate() {
        tracing::info!(
            email = %mask_email(&request.email),
            "Validation failed for send_code request"
        );
        return validation_error_response(&errors);
    }

    match state.auth_service.send_code(&request.email).await {
        Ok(issued) => HttpResponse::Ok().json(SendCodeResponse {
            message: "Verification code sent".to_string(),
            resend_after: issued.resend_after,
        }),
        Err(error) => handle_domain_error(error),
    }
}
