//! Verification token store interface.
//!
//! A keyed map from subject to its single live `ResetToken`. The store is
//! deliberately dumb: create/replace, lookup and delete. State-machine
//! decisions and per-subject serialization belong to the lifecycle engine
//! that owns the store.

use async_trait::async_trait;

use crate::domain::entities::reset_token::ResetToken;
use crate::errors::DomainError;

/// Keyed storage for in-flight reset tokens
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Insert the record for `token.subject`, replacing any existing one.
    /// Replacement is silent: there is no merge between old and new state.
    async fn put(&self, token: ResetToken) -> Result<(), DomainError>;

    /// Fetch the live record for a subject
    async fn get(&self, subject: &str) -> Result<Option<ResetToken>, DomainError>;

    /// Delete the record for a subject
    ///
    /// # Returns
    /// * `Ok(true)` - A record existed and was removed
    /// * `Ok(false)` - Nothing was stored for this subject
    async fn remove(&self, subject: &str) -> Result<bool, DomainError>;
}
