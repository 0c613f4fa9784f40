//! Main password reset service implementation

use std::sync::Arc;

use crate::domain::entities::reset_token::ResetToken;
use crate::errors::{DomainResult, ResetError};
use crate::repositories::token_store::TokenStore;
use crate::services::codegen;
use crate::services::notification::NotificationGateway;
use tp_shared::utils::email::mask_email;

use super::config::PasswordResetConfig;
use super::locks::SubjectLocks;
use super::types::IssueOutcome;

/// Service driving the reset-token state machine.
///
/// Each operation holds the subject's lock across its whole
/// read-check-mutate-write cycle. Gateway sends happen outside the lock so
/// a slow provider cannot stall verification traffic for other subjects.
pub struct PasswordResetService<S: TokenStore, G: NotificationGateway> {
    /// Keyed token storage
    store: Arc<S>,
    /// Out-of-band code delivery
    gateway: Arc<G>,
    /// Service configuration
    config: PasswordResetConfig,
    /// Per-subject operation locks
    locks: SubjectLocks,
}

impl<S: TokenStore, G: NotificationGateway> PasswordResetService<S, G> {
    /// Create a new password reset service
    pub fn new(store: Arc<S>, gateway: Arc<G>, config: PasswordResetConfig) -> Self {
        Self {
            store,
            gateway,
            config,
            locks: SubjectLocks::new(),
        }
    }

    /// Issue a reset token for a subject.
    ///
    /// Always succeeds: any previous token for the subject is silently
    /// replaced, even one that was already verified. The code is handed to
    /// the email gateway after the record is stored; a delivery failure is
    /// logged but does not roll the issuance back.
    pub async fn issue(&self, subject: &str) -> DomainResult<IssueOutcome> {
        let token = {
            let _guard = self.locks.acquire(subject).await;

            let mut token = ResetToken::new_with_expiration(
                subject.to_string(),
                self.config.code_expiration_minutes,
            );
            token.code = codegen::generate_code(self.config.code_length);
            token.max_attempts = self.config.max_attempts;

            self.store.put(token.clone()).await?;
            token
        };

        tracing::info!(
            subject = %mask_email(subject),
            event = "reset_token_issued",
            expires_at = %token.expires_at,
            "Issued password reset token"
        );

        // Out-of-band delivery, outside the subject lock
        let email_dispatched = self
            .gateway
            .send_email(
                subject,
                "TaskPrioritize Password Reset",
                &format!(
                    "Your TaskPrioritize reset code is: {}. It expires in {} minutes.",
                    token.code, self.config.code_expiration_minutes
                ),
            )
            .await;

        if !email_dispatched {
            tracing::warn!(
                subject = %mask_email(subject),
                event = "reset_email_failed",
                "Reset code email was not accepted; token remains valid"
            );
        }

        Ok(IssueOutcome {
            token,
            email_dispatched,
        })
    }

    /// Verify a submitted code for a subject.
    ///
    /// Expiry is checked first and purges the record. The attempt counter
    /// moves on every non-exhausted try, the winning one included;
    /// exhaustion reports without purging.
    pub async fn verify_code(&self, subject: &str, submitted: &str) -> DomainResult<()> {
        let _guard = self.locks.acquire(subject).await;

        let mut token = match self.store.get(subject).await? {
            Some(token) => token,
            None => return Err(ResetError::NotFound.into()),
        };

        if token.is_expired() {
            self.store.remove(subject).await?;
            tracing::info!(
                subject = %mask_email(subject),
                event = "reset_token_expired",
                "Purged expired reset token on verify"
            );
            return Err(ResetError::Expired.into());
        }

        let result = token.verify(submitted);

        // Exhaustion mutates nothing; every other outcome moved the
        // counter (and possibly the verified flag) and must be persisted.
        if !matches!(result, Err(ResetError::AttemptsExhausted)) {
            self.store.put(token.clone()).await?;
        }

        match &result {
            Ok(()) => {
                tracing::info!(
                    subject = %mask_email(subject),
                    event = "reset_code_verified",
                    attempts = token.attempts,
                    "Reset code verified"
                );
            }
            Err(err) => {
                tracing::warn!(
                    subject = %mask_email(subject),
                    event = "reset_code_rejected",
                    attempts = token.attempts,
                    reason = %err,
                    "Reset code rejected"
                );
            }
        }

        result.map_err(Into::into)
    }

    /// Finalize the guarded action: re-check expiry, the verified flag and
    /// exact code equality, then delete the record. Deletion makes the
    /// token single-use; a replayed finalize finds nothing.
    ///
    /// Finalize never spends an attempt; it only re-checks what
    /// `verify_code` already established.
    pub async fn finalize(&self, subject: &str, submitted: &str) -> DomainResult<()> {
        let _guard = self.locks.acquire(subject).await;

        let token = match self.store.get(subject).await? {
            Some(token) => token,
            None => return Err(ResetError::InvalidRequest.into()),
        };

        if token.is_expired() {
            self.store.remove(subject).await?;
            tracing::info!(
                subject = %mask_email(subject),
                event = "reset_token_expired",
                "Purged expired reset token on finalize"
            );
            return Err(ResetError::Expired.into());
        }

        if !token.verified || !token.matches_code(submitted) {
            tracing::warn!(
                subject = %mask_email(subject),
                event = "reset_finalize_rejected",
                verified = token.verified,
                "Finalize preconditions unmet"
            );
            return Err(ResetError::InvalidRequest.into());
        }

        // Consumption is destructive; under the subject lock the delete
        // happens exactly once.
        self.store.remove(subject).await?;

        tracing::info!(
            subject = %mask_email(subject),
            event = "reset_token_consumed",
            "Reset token consumed"
        );

        Ok(())
    }
}
