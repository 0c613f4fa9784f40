//! Account repository trait defining the interface for account lookup and
//! persistence.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository contract for Account persistence.
///
/// Accounts are keyed by normalized email, the same subject string the
/// token lifecycle and reminder dispatcher use.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by normalized email
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Persist a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The created account
    /// * `Err(DomainError::Validation)` - The email is already registered
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Update an existing account
    async fn update(&self, account: Account) -> Result<Account, DomainError>;
}
