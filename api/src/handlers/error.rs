//! Mapping of domain errors onto HTTP responses
//!
//! Every failure leaves the API through `handle_domain_error`, so no route
//! can reveal whether an email exists or ever requested a code.

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::{header, StatusCode},
    HttpRequest, HttpResponse,
};
use validator::ValidationErrors;

use sr_core::errors::{AuthError, CatalogError, DomainError, WebhookError};

use crate::dto::{error_codes, error_response, ErrorResponse, ErrorResponseExt};

const TRANSIENT_MESSAGE: &str = "Service temporarily unavailable. Please try again later";
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            tracing::info!(error = %message, "Rejected invalid request");
            error_response(StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR, &message)
        }
        DomainError::NotFound { resource } => error_response(
            StatusCode::NOT_FOUND,
            error_codes::NOT_FOUND,
            &format!("{} not found", resource),
        ),
        DomainError::Internal { message } => {
            tracing::error!(error = %message, "Internal error");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                INTERNAL_MESSAGE,
            )
        }
        DomainError::Auth(auth_error) => handle_auth_error(auth_error),
        DomainError::Webhook(webhook_error) => handle_webhook_error(webhook_error),
        DomainError::Catalog(catalog_error) => handle_catalog_error(catalog_error),
    }
}

fn handle_auth_error(error: AuthError) -> HttpResponse {
    match error {
        AuthError::RateLimited { retry_after } => {
            let body = ErrorResponse::new(error_codes::RATE_LIMIT_EXCEEDED, error.to_string())
                .with_retry_after(retry_after);
            HttpResponse::TooManyRequests()
                .insert_header((header::RETRY_AFTER, retry_after.to_string()))
                .json(body)
        }
        AuthError::TransientFailure { reason } => {
            tracing::error!(error = %reason, event = "transient_failure", "Request failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                TRANSIENT_MESSAGE,
            )
        }
        AuthError::InvalidVerificationCode => error_response(
            StatusCode::UNAUTHORIZED,
            error_codes::VERIFICATION_CODE_INVALID,
            &error.to_string(),
        ),
        AuthError::Unauthenticated => error_response(
            StatusCode::UNAUTHORIZED,
            error_codes::UNAUTHORIZED,
            &error.to_string(),
        ),
    }
}

fn handle_webhook_error(error: WebhookError) -> HttpResponse {
    let (status, code) = match error {
        WebhookError::MissingSignature => (StatusCode::BAD_REQUEST, error_codes::SIGNATURE_MISSING),
        WebhookError::InvalidSignature => (StatusCode::FORBIDDEN, error_codes::SIGNATURE_INVALID),
        WebhookError::InvalidPayload => (StatusCode::BAD_REQUEST, error_codes::PAYLOAD_INVALID),
    };
    error_response(status, code, &error.to_string())
}

fn handle_catalog_error(error: CatalogError) -> HttpResponse {
    let (status, code) = match error {
        CatalogError::TemplateNotFound => (StatusCode::NOT_FOUND, error_codes::TEMPLATE_NOT_FOUND),
        CatalogError::ProRequired => (StatusCode::FORBIDDEN, error_codes::PRO_REQUIRED),
    };
    error_response(status, code, &error.to_string())
}

/// 400 response listing the failing fields
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut body = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data");
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        body = body.with_field_errors(field, messages);
    }
    body.to_response(StatusCode::BAD_REQUEST)
}

/// Turn JSON extractor failures into the standard error body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "Request body too large".to_string()
        }
        other => format!("Invalid JSON body: {}", other),
    };
    let response = error_response(StatusCode::BAD_REQUEST, error_codes::BAD_REQUEST, &message);
    InternalError::from_response(err, response).into()
}
