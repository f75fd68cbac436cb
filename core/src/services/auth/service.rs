//! Main authentication service implementation

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::identity::Identity;
use crate::domain::entities::verification_code::IssuedCode;
use crate::domain::entities::webhook_event::{BillingEvent, WebhookEvent};
use crate::domain::value_objects::{EmailIdentity, SessionIdentity};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::IdentityRepository;
use crate::services::session::{SessionManager, SessionVerifier};
use crate::services::verification::keys::revoked_session_key;
use crate::services::verification::{CodeMailer, CodeService, TtlStore};

const REVOKED_MARKER: &str = "1";

/// Outcome of a successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// The identity that logged in
    pub identity: Identity,
    /// Signed session token for the cookie
    pub session_token: String,
}

/// Authentication service for the passwordless email flow
pub struct AuthService<R, S, M>
where
    R: IdentityRepository,
    S: TtlStore,
    M: CodeMailer,
{
    /// Identity persistence
    identity_repository: Arc<R>,
    /// Code issuance and redemption
    code_service: Arc<CodeService<S, M>>,
    /// Session token signing
    session_manager: Arc<SessionManager>,
}

impl<R, S, M> AuthService<R, S, M>
where
    R: IdentityRepository,
    S: TtlStore,
    M: CodeMailer,
{
    /// Create a new authentication service
    pub fn new(
        identity_repository: Arc<R>,
        code_service: Arc<CodeService<S, M>>,
        session_manager: Arc<SessionManager>,
    ) -> Self {
        Self {
            identity_repository,
            code_service,
            session_manager,
        }
    }

    /// Session manager shared with the request gate
    pub fn session_manager(&self) -> &Arc<SessionManager> {
        &self.session_manager
    }

    /// Validate `email` and send it a verification code
    ///
    /// # Errors
    ///
    /// * `DomainError::Validation` - malformed email
    /// * `AuthError::RateLimited` / `AuthError::TransientFailure` from the code service
    pub async fn send_code(&self, email: &str) -> DomainResult<IssuedCode> {
        let identity = EmailIdentity::parse(email)?;
        Ok(self.code_service.issue_code(&identity).await?)
    }

    /// Redeem a code and open a session
    ///
    /// An unknown email and a wrong code both fail with
    /// `AuthError::InvalidVerificationCode`.
    pub async fn login(&self, email: &str, code: &str) -> DomainResult<LoginResult> {
        let email = EmailIdentity::parse(email)?;

        if !self.code_service.verify_code(&email, code).await? {
            return Err(AuthError::InvalidVerificationCode.into());
        }

        let identity = self.find_or_create_identity(&email).await?;
        let session_token = self.session_manager.issue(&identity)?;

        tracing::info!(
            identity_id = identity.id,
            email = %email.masked(),
            event = "login_success",
            "Identity logged in"
        );

        Ok(LoginResult {
            identity,
            session_token,
        })
    }

    /// Look up an identity by normalized email, creating it if absent
    ///
    /// Only called after the email was proven by a verification code.
    pub async fn find_or_create_identity(&self, email: &EmailIdentity) -> DomainResult<Identity> {
        if let Some(identity) = self.identity_repository.find_by_email(email.as_str()).await? {
            return Ok(identity);
        }

        let identity = self
            .identity_repository
            .create(Identity::new_verified(
                email.as_str().to_string(),
                email.as_str().to_string(),
            ))
            .await?;

        tracing::info!(
            identity_id = identity.id,
            email = %email.masked(),
            event = "identity_created",
            "Created identity on first login"
        );
        Ok(identity)
    }

    /// Resolve the identity behind an authenticated session
    ///
    /// A session for an identity that no longer exists is unauthenticated.
    pub async fn current_identity(&self, session: &SessionIdentity) -> DomainResult<Identity> {
        self.identity_repository
            .find_by_id(session.id)
            .await?
            .ok_or_else(|| AuthError::Unauthenticated.into())
    }

    /// Mark the identity owning `email` as pro
    ///
    /// Upgrading an identity that is already pro is a no-op.
    pub async fn upgrade_to_pro(&self, email: &str) -> DomainResult<Identity> {
        let email = EmailIdentity::parse(email)?;

        let mut identity = self
            .identity_repository
            .find_by_email(email.as_str())
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "Identity".to_string(),
            })?;

        if identity.is_pro {
            return Ok(identity);
        }

        if !self.identity_repository.mark_pro(identity.id).await? {
            return Err(DomainError::NotFound {
                resource: "Identity".to_string(),
            });
        }
        identity.upgrade_to_pro();

        tracing::info!(
            identity_id = identity.id,
            email = %email.masked(),
            event = "identity_upgraded",
            "Identity upgraded to pro"
        );
        Ok(identity)
    }

    /// Verify a session token and reject it once its session was revoked
    ///
    /// A store failure also rejects the token.
    pub async fn authenticate_session(&self, token: &str) -> Result<SessionIdentity, AuthError> {
        let session = self.session_manager.verify(token)?;

        let revoked = self
            .code_service
            .store()
            .get(&revoked_session_key(&session.session_id))
            .await
            .map_err(|e| {
                tracing::error!(
                    identity_id = session.id,
                    error = %e,
                    event = "session_revocation_check_failed",
                    "Failed to check session revocation"
                );
                AuthError::Unauthenticated
            })?;

        if revoked.is_some() {
            tracing::debug!(
                identity_id = session.id,
                event = "session_revoked",
                "Rejected revoked session token"
            );
            return Err(AuthError::Unauthenticated);
        }
        Ok(session)
    }

    /// Revoke a session for the rest of its lifetime
    ///
    /// The denylist entry expires together with the token.
    pub async fn revoke_session(&self, session: &SessionIdentity) -> DomainResult<()> {
        let Some(remaining) = session.remaining_lifetime(Utc::now().timestamp()) else {
            return Ok(());
        };

        self.code_service
            .store()
            .set(
                &revoked_session_key(&session.session_id),
                REVOKED_MARKER,
                Duration::from_secs(remaining),
            )
            .await
            .map_err(AuthError::from)?;

        tracing::info!(
            identity_id = session.id,
            event = "session_revoked",
            "Session revoked"
        );
        Ok(())
    }

    /// Apply a verified billing event
    ///
    /// Returns the identity that changed, if any.
    pub async fn apply_billing_event(&self, event: &WebhookEvent) -> DomainResult<Option<Identity>> {
        match event.classify() {
            BillingEvent::TransactionCompleted { email: Some(email) } => {
                self.upgrade_to_pro(&email).await.map(Some)
            }
            BillingEvent::TransactionCompleted { email: None } => {
                tracing::warn!(
                    event_id = %event.event_id,
                    event = "billing_event_unattributed",
                    "Completed transaction carries no custom_data.email"
                );
                Ok(None)
            }
            BillingEvent::SubscriptionCreated { subscription_id } => {
                tracing::info!(
                    event_id = %event.event_id,
                    subscription_id = ?subscription_id,
                    event = "subscription_created",
                    "Subscription created"
                );
                Ok(None)
            }
            BillingEvent::SubscriptionUpdated {
                subscription_id,
                status,
            } => {
                tracing::info!(
                    event_id = %event.event_id,
                    subscription_id = ?subscription_id,
                    status = ?status,
                    event = "subscription_updated",
                    "Subscription updated"
                );
                Ok(None)
            }
            BillingEvent::Ignored(event_type) => {
                tracing::debug!(
                    event_id = %event.event_id,
                    event_type = %event_type,
                    "Ignoring billing event"
                );
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl<R, S, M> SessionVerifier for AuthService<R, S, M>
where
    R: IdentityRepository,
    S: TtlStore,
    M: CodeMailer,
{
    async fn authenticate(&self, token: &str) -> Result<SessionIdentity, AuthError> {
        self.authenticate_session(token).await
    }
}
