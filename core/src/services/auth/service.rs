//! Account service implementation

use std::sync::Arc;

use crate::domain::entities::account::{Account, NotificationPreference};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::account::AccountRepository;
use tp_shared::utils::email::mask_email;

use super::password::PasswordHasher;

/// Registration, login and credential updates over the account repository.
///
/// Callers pass already-normalized emails; policy checks (email shape,
/// password strength) belong to the request layer.
pub struct AuthService<A: AccountRepository, H: PasswordHasher> {
    accounts: Arc<A>,
    hasher: Arc<H>,
}

impl<A: AccountRepository, H: PasswordHasher> AuthService<A, H> {
    /// Create a new auth service
    pub fn new(accounts: Arc<A>, hasher: Arc<H>) -> Self {
        Self { accounts, hasher }
    }

    /// Register a new account. Contact details are optional and feed the
    /// reminder dispatcher's fallback chain.
    pub async fn register(
        &self,
        email: String,
        password: &str,
        phone: Option<String>,
        notification_preference: Option<NotificationPreference>,
    ) -> DomainResult<Account> {
        let password_hash = self.hasher.hash(password)?;

        let mut account = Account::new(email, password_hash);
        account.phone = phone;
        account.notification_preference = notification_preference;

        let account = self.accounts.create(account).await?;
        tracing::info!(
            email = %mask_email(&account.email),
            event = "account_registered",
            "Account registered"
        );
        Ok(account)
    }

    /// Authenticate by email and password.
    ///
    /// A missing account and a wrong password both answer
    /// `AuthenticationFailed`; which one it was is not leaked.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<Account> {
        let account = match self.accounts.find_by_email(email).await? {
            Some(account) => account,
            None => {
                tracing::warn!(
                    email = %mask_email(email),
                    event = "login_unknown_account",
                    "Login attempt for unknown account"
                );
                return Err(DomainError::AuthenticationFailed);
            }
        };

        if !self.hasher.verify(password, &account.password_hash)? {
            tracing::warn!(
                email = %mask_email(email),
                event = "login_bad_password",
                "Login attempt with wrong password"
            );
            return Err(DomainError::AuthenticationFailed);
        }

        Ok(account)
    }

    /// Replace the stored credential. Called by the request layer after a
    /// successful reset-token finalize.
    pub async fn update_password(&self, email: &str, new_password: &str) -> DomainResult<()> {
        let mut account = self.accounts.find_by_email(email).await?.ok_or_else(|| {
            DomainError::NotFound {
                resource: "Account".to_string(),
            }
        })?;

        account.password_hash = self.hasher.hash(new_password)?;
        self.accounts.update(account).await?;

        tracing::info!(
            email = %mask_email(email),
            event = "password_updated",
            "Password updated"
        );
        Ok(())
    }
}
