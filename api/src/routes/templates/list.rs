use actix_web::{web, HttpResponse};

use sr_core::repositories::{IdentityRepository, TemplateRepository};
use sr_core::services::verification::{CodeMailer, TtlStore};

use crate::app::AppState;
use crate::dto::TemplateListResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::session::SessionContext;

/// Handler for GET /api/v1/templates
///
/// Lists active categories with their active templates. Pro templates are
/// marked `is_locked` for free accounts.
///
/// # Errors
///
/// * 401 - no valid session
pub async fn list_templates<R, S, M, T>(
    state: web::Data<AppState<R, S, M, T>>,
    session: SessionContext,
) -> HttpResponse
where
    R: IdentityRepository + 'static,
    S: TtlStore + 'static,
    M: CodeMailer + 'static,
    T: TemplateRepository + 'static,
{
    match state
        .catalog_service
        .list_by_category(session.identity())
        .await
    {
        Ok(categories) => HttpResponse::Ok().json(TemplateListResponse { categories }),
        Err(error) => handle_domain_error(error),
    }
}
