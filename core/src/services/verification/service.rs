//! Code service implementation

use constant_time_eq::constant_time_eq;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::verification_code::{is_well_formed_code, IssuedCode};
use crate::domain::value_objects::EmailIdentity;
use crate::errors::AuthError;

use super::config::CodeServiceConfig;
use super::generator::OsCodeGenerator;
use super::keys::{code_key, send_key, verify_key};
use super::traits::{CodeGenerator, CodeMailer, TtlStore};

const COOLDOWN_MARKER: &str = "1";

/// Issues and redeems one-time verification codes
///
/// The store is the single source of truth: the service keeps no codes or
/// locks in process memory, so any number of instances may share one store.
pub struct CodeService<S: TtlStore, M: CodeMailer> {
    /// Store holding codes and cooldown locks
    store: Arc<S>,
    /// Mailer used to deliver codes
    mailer: Arc<M>,
    /// Candidate source
    generator: Arc<dyn CodeGenerator>,
    /// Service configuration
    config: CodeServiceConfig,
}

impl<S: TtlStore, M: CodeMailer> CodeService<S, M> {
    /// Create a code service drawing codes from the OS CSPRNG
    pub fn new(store: Arc<S>, mailer: Arc<M>, config: CodeServiceConfig) -> Self {
        Self::with_generator(store, mailer, Arc::new(OsCodeGenerator), config)
    }

    /// Create a code service with an explicit code generator
    pub fn with_generator(
        store: Arc<S>,
        mailer: Arc<M>,
        generator: Arc<dyn CodeGenerator>,
        config: CodeServiceConfig,
    ) -> Self {
        Self {
            store,
            mailer,
            generator,
            config,
        }
    }

    /// Store shared with session revocation
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Service configuration
    pub fn config(&self) -> &CodeServiceConfig {
        &self.config
    }

    /// Issue a new code for `identity` and mail it
    ///
    /// 1. Acquires the per-identity cooldown lock
    /// 2. Claims a globally unique candidate in the `code:` namespace
    /// 3. Points `verify:<identity>` at the new code
    /// 4. Releases the previous code's claim, if this identity still owns it
    /// 5. Sends the code
    ///
    /// A previous code keeps its claim until the new one is stored, so a
    /// failed issuance never leaves a live code without its uniqueness
    /// claim. The cooldown lock is never released early. A delivery failure
    /// leaves the stored code redeemable.
    ///
    /// # Errors
    ///
    /// * `AuthError::RateLimited` - a code was requested within the cooldown
    /// * `AuthError::TransientFailure` - store, generation or delivery failure
    pub async fn issue_code(&self, identity: &EmailIdentity) -> Result<IssuedCode, AuthError> {
        let email = identity.as_str();
        let cooldown = self.config.send_cooldown;
        let code_ttl = self.config.code_ttl;

        let acquired = self
            .store
            .set_if_absent(&send_key(email), COOLDOWN_MARKER, cooldown)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %identity.masked(),
                    error = %e,
                    event = "cooldown_lock_failed",
                    "Failed to acquire send cooldown lock"
                );
                AuthError::from(e)
            })?;

        if !acquired {
            let retry_after = self.retry_after(email).await;
            tracing::warn!(
                email = %identity.masked(),
                retry_after = retry_after,
                event = "rate_limit_exceeded",
                "Verification code requested within cooldown"
            );
            return Err(AuthError::RateLimited { retry_after });
        }

        let previous = self.store.get(&verify_key(email)).await?;

        let code = self.claim_unique_code(identity).await?;

        if let Err(e) = self.store.set(&verify_key(email), &code, code_ttl).await {
            tracing::error!(
                email = %identity.masked(),
                error = %e,
                event = "code_storage_failed",
                "Failed to store verification code index"
            );
            self.release_claim(identity, &code).await;
            return Err(AuthError::from(e));
        }

        if let Some(old_code) = previous.filter(|old| *old != code) {
            self.release_claim(identity, &old_code).await;
            tracing::debug!(
                email = %identity.masked(),
                event = "code_superseded",
                "Released previous verification code"
            );
        }

        tracing::info!(
            email = %identity.masked(),
            ttl_seconds = code_ttl.as_secs(),
            event = "code_issued",
            "Issued new verification code"
        );

        if let Err(e) = self.mailer.send_code(email, &code).await {
            tracing::error!(
                email = %identity.masked(),
                error = %e,
                event = "code_delivery_failed",
                "Failed to deliver verification code"
            );
            return Err(AuthError::from(e));
        }

        Ok(IssuedCode::new(
            code,
            email.to_string(),
            code_ttl.as_secs(),
            cooldown.as_secs(),
        ))
    }

    /// Redeem `submitted` for `identity`
    ///
    /// Returns `Ok(true)` exactly once per issued code. An unknown identity,
    /// an expired code and a wrong code all return `Ok(false)`. A mismatch
    /// does not touch the store.
    ///
    /// # Errors
    ///
    /// * `AuthError::TransientFailure` - the store could not be reached
    pub async fn verify_code(
        &self,
        identity: &EmailIdentity,
        submitted: &str,
    ) -> Result<bool, AuthError> {
        if !is_well_formed_code(submitted) {
            tracing::debug!(
                email = %identity.masked(),
                code_length = submitted.len(),
                event = "invalid_code_format",
                "Malformed verification code submitted"
            );
            return Ok(false);
        }

        let email = identity.as_str();
        let verify = verify_key(email);

        let stored = match self.store.get(&verify).await? {
            Some(stored) => stored,
            None => {
                tracing::info!(
                    email = %identity.masked(),
                    event = "code_verification_failed",
                    "No live verification code"
                );
                return Ok(false);
            }
        };

        if !constant_time_eq(stored.as_bytes(), submitted.as_bytes()) {
            tracing::info!(
                email = %identity.masked(),
                event = "code_verification_failed",
                "Verification code mismatch"
            );
            return Ok(false);
        }

        // Only the caller that removes this exact value redeems it. A
        // concurrent redeem or reissue makes the delete miss.
        if !self.store.delete_if_equals(&verify, &stored).await? {
            tracing::info!(
                email = %identity.masked(),
                event = "code_already_consumed",
                "Verification code consumed or superseded by a concurrent request"
            );
            return Ok(false);
        }

        self.release_claim(identity, &stored).await;

        tracing::info!(
            email = %identity.masked(),
            event = "code_verified",
            "Verification code redeemed"
        );

        Ok(true)
    }

    /// Seconds until the cooldown lock for `email` expires
    ///
    /// Falls back to the full cooldown when the store cannot tell.
    async fn retry_after(&self, email: &str) -> u64 {
        let fallback = self.config.send_cooldown.as_secs().max(1);
        match self.store.ttl_remaining(&send_key(email)).await {
            Ok(Some(remaining)) => match ceil_secs(remaining) {
                0 => fallback,
                secs => secs,
            },
            Ok(None) => fallback,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read cooldown TTL");
                fallback
            }
        }
    }

    /// Drop the `code:<code>` claim while it still belongs to `identity`
    ///
    /// An expired claim may already have been taken by another identity, so
    /// the delete is conditional. Failures are logged; the claim then
    /// expires on its own.
    async fn release_claim(&self, identity: &EmailIdentity, code: &str) {
        if let Err(e) = self
            .store
            .delete_if_equals(&code_key(code), identity.as_str())
            .await
        {
            tracing::warn!(
                email = %identity.masked(),
                error = %e,
                event = "code_release_failed",
                "Failed to release code claim; it will expire on its own"
            );
        }
    }

    /// Draw candidates until one is claimed in the global `code:` namespace
    async fn claim_unique_code(&self, identity: &EmailIdentity) -> Result<String, AuthError> {
        let email = identity.as_str();
        let attempts = self.config.max_generation_attempts.max(1);

        for attempt in 1..=attempts {
            let candidate = self.generator.generate();
            if self
                .store
                .set_if_absent(&code_key(&candidate), email, self.config.code_ttl)
                .await?
            {
                return Ok(candidate);
            }
            tracing::warn!(
                email = %identity.masked(),
                attempt = attempt,
                event = "code_collision",
                "Generated code already in use, retrying"
            );
        }

        tracing::error!(
            email = %identity.masked(),
            attempts = attempts,
            event = "code_generation_exhausted",
            "Failed to generate a unique verification code"
        );
        Err(AuthError::transient("failed to generate unique code"))
    }
}

/// Round a duration up to whole seconds
fn ceil_secs(duration: Duration) -> u64 {
    let secs = duration.as_secs();
    if duration.subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}
