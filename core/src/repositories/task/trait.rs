//! Task repository trait defining the interface for task persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::task::Task;
use crate::errors::DomainError;

/// Which tasks a reminder dispatch pass should consider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderScope {
    /// Every task in the store (cron-style trigger)
    All,
    /// Only tasks owned by one subject (dashboard trigger)
    Owner(String),
}

/// Repository contract for Task persistence
///
/// Implementations handle the actual storage while keeping the boundary
/// between domain and infrastructure. The reminder dispatcher relies on
/// `list_in_scope` plus `persist_batch`: the scan reads a snapshot, and
/// flag changes land in one commit at the end of the pass.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persist a new task
    async fn create(&self, task: Task) -> Result<Task, DomainError>;

    /// Find a task by its identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, DomainError>;

    /// Update an existing task
    ///
    /// # Returns
    /// * `Ok(Task)` - The updated task
    /// * `Err(DomainError::NotFound)` - No task with this id exists
    async fn update(&self, task: Task) -> Result<Task, DomainError>;

    /// Delete a task
    ///
    /// # Returns
    /// * `Ok(true)` - Task was deleted
    /// * `Ok(false)` - Task not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// List every task owned by a subject
    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Task>, DomainError>;

    /// List every task a dispatch pass should look at
    async fn list_in_scope(&self, scope: &ReminderScope) -> Result<Vec<Task>, DomainError>;

    /// Persist a batch of already-existing tasks as one commit.
    /// Dispatch passes call this once, after the scan, and only when at
    /// least one task changed.
    async fn persist_batch(&self, tasks: &[Task]) -> Result<(), DomainError>;
}
