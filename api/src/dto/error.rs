//! JSON error bodies

use actix_web::{http::StatusCode, HttpResponse};
pub use sr_shared::errors::{error_codes, ErrorResponse};

/// Render an `ErrorResponse` with an actix-web status
pub trait ErrorResponseExt {
    fn to_response(&self, status: StatusCode) -> HttpResponse;
}

impl ErrorResponseExt for ErrorResponse {
    fn to_response(&self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}

/// Error body with no details
pub fn error_response(status: StatusCode, code: &str, message: &str) -> HttpResponse {
    ErrorResponse::new(code, message).to_response(status)
}
