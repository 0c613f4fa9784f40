//! Mock implementation of TaskRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::task::Task;
use crate::errors::DomainError;

use super::trait_::{ReminderScope, TaskRepository};

/// In-memory task repository for tests
#[derive(Default)]
pub struct MockTaskRepository {
    tasks: Arc<RwLock<HashMap<Uuid, Task>>>,
    batch_commits: AtomicUsize,
}

impl MockTaskRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with a set of tasks
    pub async fn seed(&self, tasks: Vec<Task>) {
        let mut map = self.tasks.write().await;
        for task in tasks {
            map.insert(task.id, task);
        }
    }

    /// Number of `persist_batch` commits, for assertions
    pub fn batch_commits(&self) -> usize {
        self.batch_commits.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
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
        self.batch_commits.fetch_add(1, Ordering::SeqCst);
        let mut tasks = self.tasks.write().await;
        for task in batch {
            tasks.insert(task.id, task.clone());
        }
        Ok(())
    }
}
