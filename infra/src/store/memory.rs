//! In-memory store implementations

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use tp_core::domain::entities::account::Account;
use tp_core::domain::entities::emotion_log::EmotionLog;
use tp_core::domain::entities::reset_token::ResetToken;
use tp_core::domain::entities::task::Task;
use tp_core::errors::DomainError;
use tp_core::repositories::account::AccountRepository;
use tp_core::repositories::emotion_log::EmotionLogRepository;
use tp_core::repositories::task::{ReminderScope, TaskRepository};
use tp_core::repositories::token_store::TokenStore;

/// Token store backed by a keyed map.
///
/// The map only ever holds in-flight reset requests: consume, expiry
/// purge and superseding issuance all delete or replace entries, so its
/// size is bounded by concurrently-resetting subjects.
#[derive(Clone, Default)]
pub struct InMemoryTokenStore {
    tokens: Arc<RwLock<HashMap<String, ResetToken>>>,
}

impl InMemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn put(&self, token: ResetToken) -> Result<(), DomainError> {
        let mut tokens = self.tokens.write().await;
        let replaced = tokens.insert(token.subject.clone(), token).is_some();
        if replaced {
            tracing::debug!(event = "reset_token_replaced", "Superseded an existing reset token");
        }
        Ok(())
    }

    async fn get(&self, subject: &str) -> Result<Option<ResetToken>, DomainError> {
        Ok(self.tokens.read().await.get(subject).cloned())
    }

    async fn remove(&self, subject: &str) -> Result<bool, DomainError> {
        Ok(self.tokens.write().await.remove(subject).is_some())
    }
}

/// Task storage backed by a keyed map
#[derive(Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<Uuid, Task>>>,
}

impl InMemoryTaskRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, task: Task) -> Result<Task, DomainError> {
        self.tasks.write().await.insert(task.id, task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, DomainError> {
        Ok(self.tasks.read().await.get(&id).cloned())
    }

    async fn update(&self, task: Task) -> Result<Task, DomainError> {
        let mut tasks = self.tasks.write().await;
        if !tasks.contains_key(&task.id) {
            return Err(DomainError::NotFound {
                resource: "Task".to_string(),
            });
        }
        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.tasks.write().await.remove(&id).is_some())
    }

    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Task>, DomainError> {
        let tasks = self.tasks.read().await;
        let mut owned: Vec<Task> = tasks.values().filter(|t| t.owner == owner).cloned().collect();
        owned.sort_by_key(|t| t.created_at);
        Ok(owned)
    }

    async fn list_in_scope(&self, scope: &ReminderScope) -> Result<Vec<Task>, DomainError> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .values()
            .filter(|t| match scope {
                ReminderScope::All => true,
                ReminderScope::Owner(owner) => &t.owner == owner,
            })
            .cloned()
            .collect())
    }

    async fn persist_batch(&self, batch: &[Task]) -> Result<(), DomainError> {
        // One write lock for the whole batch is the single commit point
        let mut tasks = self.tasks.write().await;
        for task in batch {
            tasks.insert(task.id, task.clone());
        }
        Ok(())
    }
}

/// Account storage keyed by normalized email
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.email) {
            return Err(DomainError::Validation {
                message: "Email already registered".to_string(),
            });
        }
        accounts.insert(account.email.clone(), account.clone());
        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;
        if !accounts.contains_key(&account.email) {
            return Err(DomainError::NotFound {
                resource: "Account".to_string(),
            });
        }
        accounts.insert(account.email.clone(), account.clone());
        Ok(account)
    }
}

/// Append-only emotion scan log
#[derive(Clone, Default)]
pub struct InMemoryEmotionLogRepository {
    logs: Arc<RwLock<Vec<EmotionLog>>>,
}

impl InMemoryEmotionLogRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmotionLogRepository for InMemoryEmotionLogRepository {
    async fn append(&self, log: EmotionLog) -> Result<EmotionLog, DomainError> {
        self.logs.write().await.push(log.clone());
        Ok(log)
    }

    async fn list_by_owner(&self, owner: &str) -> Result<Vec<EmotionLog>, DomainError> {
        let logs = self.logs.read().await;
        let mut owned: Vec<EmotionLog> =
            logs.iter().filter(|l| l.owner == owner).cloned().collect();
        owned.sort_by(|a, b| b.scanned_at.cmp(&a.scanned_at));
        Ok(owned)
    }
}
