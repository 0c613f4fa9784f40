//! Mock implementation of TokenStore for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::reset_token::ResetToken;
use crate::errors::DomainError;

use super::trait_::TokenStore;

/// In-memory token store for tests
#[derive(Default)]
pub struct MockTokenStore {
    tokens: Arc<RwLock<HashMap<String, ResetToken>>>,
    /// When set, every operation fails with an internal error
    pub should_fail: bool,
}

impl MockTokenStore {
    /// Create a new mock store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock store whose operations all fail
    pub fn failing() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            should_fail: true,
        }
    }

    /// Number of live records, for assertions
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }

    fn fail(&self) -> Result<(), DomainError> {
        if self.should_fail {
            return Err(DomainError::Internal {
                message: "token store unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl TokenStore for MockTokenStore {
    async fn put(&self, token: ResetToken) -> Result<(), DomainError> {
        self.fail()?;
        self.tokens
            .write()
            .await
            .insert(token.subject.clone(), token);
        Ok(())
    }

    async fn get(&self, subject: &str) -> Result<Option<ResetToken>, DomainError> {
        self.fail()?;
        Ok(self.tokens.read().await.get(subject).cloned())
    }

    async fn remove(&self, subject: &str) -> Result<bool, DomainError> {
        self.fail()?;
        Ok(self.tokens.write().await.remove(subject).is_some())
    }
}
