//! Session authentication middleware.
//!
//! `SessionAuth` reads the session token from the session cookie or an
//! `Authorization: Bearer` header, authenticates it (signature, expiry and
//! revocation) and stores the resulting `SessionIdentity` in the request
//! extensions. It never rejects a request itself; handlers that need a login
//! take a `SessionContext` argument, which fails with 401 when no verified
//! session is attached.

use actix_web::{
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::{header::AUTHORIZATION, StatusCode},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use sr_core::domain::value_objects::SessionIdentity;
use sr_core::errors::AuthError;
use sr_core::services::session::SessionVerifier;

use crate::dto::{error_codes, error_response};

/// Session middleware factory
#[derive(Clone)]
pub struct SessionAuth {
    sessions: Arc<dyn SessionVerifier>,
    cookie_name: String,
}

impl SessionAuth {
    /// Creates a session middleware reading `cookie_name`
    pub fn new(sessions: Arc<dyn SessionVerifier>, cookie_name: impl Into<String>) -> Self {
        Self {
            sessions,
            cookie_name: cookie_name.into(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
            sessions: self.sessions.clone(),
            cookie_name: self.cookie_name.clone(),
        }))
    }
}

/// Session middleware service
pub struct SessionAuthMiddleware<S> {
    service: Rc<S>,
    sessions: Arc<dyn SessionVerifier>,
    cookie_name: String,
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = extract_session_token(&req, &self.cookie_name);
        let sessions = Arc::clone(&self.sessions);
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if let Some(token) = token {
                match sessions.authenticate(&token).await {
                    Ok(identity) => {
                        req.extensions_mut().insert(identity);
                    }
                    Err(_) => {
                        tracing::debug!(
                            path = %req.path(),
                            event = "session_rejected",
                            "Ignoring invalid session token"
                        );
                    }
                }
            }

            service.call(req).await
        })
    }
}

/// Session token from the cookie, falling back to a Bearer header
fn extract_session_token(req: &ServiceRequest, cookie_name: &str) -> Option<String> {
    if let Some(cookie) = req.cookie(cookie_name) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Authenticated session attached by `SessionAuth`
#[derive(Debug, Clone)]
pub struct SessionContext(pub SessionIdentity);

impl SessionContext {
    pub fn identity(&self) -> &SessionIdentity {
        &self.0
    }
}

/// Extractor gating routes that require a login
impl FromRequest for SessionContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<SessionIdentity>()
            .cloned()
            .map(SessionContext)
            .ok_or_else(|| {
                let message = AuthError::Unauthenticated.to_string();
                let response =
                    error_response(StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED, &message);
                InternalError::from_response(message, response).into()
            });

        ready(result)
    }
}
