use actix_web::{http::StatusCode, web, HttpResponse};

use sr_core::repositories::{IdentityRepository, TemplateRepository};
use sr_core::services::verification::{CodeMailer, TtlStore};

use crate::app::AppState;
use crate::dto::{error_codes, error_response};
use crate::handlers::error::handle_domain_error;
use crate::middleware::session::SessionContext;

/// Handler for GET /api/v1/templates/{id}
///
/// # Errors
///
/// * 400 - `id` is not a positive integer
/// * 401 - no valid session
/// * 403 - pro template on a free account
/// * 404 - unknown or inactive template
pub async fn template_detail<R, S, M, T>(
    state: web::Data<AppState<R, S, M, T>>,
    session: SessionContext,
    path: web::Path<String>,
) -> HttpResponse
where
    R: IdentityRepository + 'static,
    S: TtlStore + 'static,
    M: CodeMailer + 'static,
    T: TemplateRepository + 'static,
{
    let Some(template_id) = parse_template_id(&path) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            error_codes::BAD_REQUEST,
            "Invalid template id",
        );
    };

    match state
        .catalog_service
        .template_detail(session.identity(), template_id)
        .await
    {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(error) => handle_domain_error(error),
    }
}

fn parse_template_id(raw: &str) -> Option<u64> {
    raw.parse::<u64>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_template_id() {
        assert_eq!(parse_template_id("42"), Some(42));
        assert_eq!(parse_template_id("0"), None);
        assert_eq!(parse_template_id("-3"), None);
        assert_eq!(parse_template_id("abc"), None);
        assert_eq!(parse_template_id(""), None);
    }
}
