use actix_web::{web, HttpRequest, HttpResponse};

use sr_core::domain::entities::webhook_event::WebhookEvent;
use sr_core::errors::{DomainError, WebhookError};
use sr_core::repositories::{IdentityRepository, TemplateRepository};
use sr_core::services::verification::{CodeMailer, TtlStore};

use crate::app::AppState;
use crate::dto::webhook::WebhookAck;
use crate::handlers::error::handle_domain_error;

/// Handler for POST /api/v1/webhooks/paddle
///
/// The signature is checked against the raw body before anything is
/// parsed. Once a delivery is authenticated and parsed it is always
/// acknowledged with 200, whatever happens while applying it.
///
/// ## Errors
/// - 400 Bad Request: signature header missing, or body is not JSON
/// - 403 Forbidden: signature does not verify (or no secret is configured)
pub async fn paddle_webhook<R, S, M, T>(
    req: HttpRequest,
    state: web::Data<AppState<R, S, M, T>>,
    body: web::Bytes,
) -> HttpResponse
where
    R: IdentityRepository + 'static,
    S: TtlStore + 'static,
    M: CodeMailer + 'static,
    T: TemplateRepository + 'static,
{
    let signature = req
        .headers()
        .get(state.signature_header.as_str())
        .and_then(|value| value.to_str().ok());

    if let Err(error) = state.webhook_authenticator.authenticate(signature, &body) {
        tracing::warn!(
            error = %error,
            body_length = body.len(),
            event = "webhook_rejected",
            "Rejected webhook delivery"
        );
        return handle_domain_error(error.into());
    }

    let event = match WebhookEvent::from_slice(&body) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(error = %e, event = "webhook_invalid_json", "Webhook body is not valid JSON");
            return handle_domain_error(DomainError::Webhook(WebhookError::InvalidPayload));
        }
    };

    tracing::info!(
        event_id = %event.event_id,
        event_type = %event.event_type,
        occurred_at = %event.occurred_at,
        event = "webhook_received",
        "Webhook accepted"
    );

    if let Err(e) = state.auth_service.apply_billing_event(&event).await {
        tracing::error!(
            event_id = %event.event_id,
            event_type = %event.event_type,
            error = %e,
            event = "webhook_processing_failed",
            "Failed to apply billing event"
        );
    }

    HttpResponse::Ok().json(WebhookAck::ok())
}
