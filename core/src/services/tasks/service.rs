//! Task management service

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::emotion_log::EmotionLabel;
use crate::domain::entities::task::{Importance, ReminderMethod, Task, Urgency};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::task::TaskRepository;

/// Partial update for a task; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub importance: Option<Importance>,
    pub urgency: Option<Urgency>,
    pub completed: Option<bool>,
    pub emotion_applied: Option<EmotionLabel>,
    pub due_at: Option<DateTime<Utc>>,
    pub reminder_at: Option<DateTime<Utc>>,
    pub reminder_method: Option<ReminderMethod>,
    pub reminder_phone: Option<String>,
}

/// CRUD over a user's tasks
pub struct TaskService<R: TaskRepository> {
    repo: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    /// Create a new task service
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// List all tasks owned by a subject
    pub async fn list(&self, owner: &str) -> DomainResult<Vec<Task>> {
        self.repo.list_by_owner(owner).await
    }

    /// Create a task with the given attributes
    pub async fn create(
        &self,
        owner: String,
        title: String,
        attrs: TaskUpdate,
    ) -> DomainResult<Task> {
        let mut task = Task::new(owner, title);
        apply(&mut task, attrs);

        let task = self.repo.create(task).await?;
        tracing::info!(task_id = %task.id, event = "task_created", "Task created");
        Ok(task)
    }

    /// Apply a partial update to an existing task
    pub async fn update(&self, id: Uuid, attrs: TaskUpdate) -> DomainResult<Task> {
        let mut task = self.find(id).await?;

        apply(&mut task, attrs);
        task.touch();

        let task = self.repo.update(task).await?;
        tracing::info!(task_id = %task.id, event = "task_updated", "Task updated");
        Ok(task)
    }

    /// Delete a task
    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::NotFound {
                resource: "Task".to_string(),
            });
        }
        tracing::info!(task_id = %id, event = "task_deleted", "Task deleted");
        Ok(())
    }

    /// Flip a task's completion status
    pub async fn toggle_complete(&self, id: Uuid) -> DomainResult<Task> {
        let mut task = self.find(id).await?;
        task.toggle_completed();
        self.repo.update(task).await
    }

    async fn find(&self, id: Uuid) -> DomainResult<Task> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "Task".to_string(),
            })
    }
}

fn apply(task: &mut Task, attrs: TaskUpdate) {
    if let Some(title) = attrs.title {
        task.title = title;
    }
    if let Some(importance) = attrs.importance {
        task.importance = importance;
    }
    if let Some(urgency) = attrs.urgency {
        task.urgency = urgency;
    }
    if let Some(completed) = attrs.completed {
        task.completed = completed;
    }
    if let Some(emotion) = attrs.emotion_applied {
        task.emotion_applied = Some(emotion);
    }
    if let Some(due_at) = attrs.due_at {
        task.due_at = Some(due_at);
    }
    if let Some(reminder_at) = attrs.reminder_at {
        // Rescheduling re-arms the reminder
        task.set_reminder_at(Some(reminder_at));
    }
    if let Some(method) = attrs.reminder_method {
        task.reminder_method = Some(method);
    }
    if let Some(phone) = attrs.reminder_phone {
        task.reminder_phone = Some(phone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::task::MockTaskRepository;
    use chrono::Duration;

    fn service() -> (TaskService<MockTaskRepository>, Arc<MockTaskRepository>) {
        let repo = Arc::new(MockTaskRepository::new());
        (TaskService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let (service, _) = service();

        service
            .create(
                "a@x.com".to_string(),
                "Write report".to_string(),
                TaskUpdate {
                    importance: Some(Importance::Important),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        service
            .create("b@x.com".to_string(), "Other".to_string(), TaskUpdate::default())
            .await
            .unwrap();

        let listed = service.list("a@x.com").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].importance, Importance::Important);
    }

    #[tokio::test]
    async fn test_update_unknown_task_is_not_found() {
        let (service, _) = service();

        let err = service
            .update(Uuid::new_v4(), TaskUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_rearms_reminder() {
        let (service, _) = service();
        let task = service
            .create("a@x.com".to_string(), "Write report".to_string(), TaskUpdate::default())
            .await
            .unwrap();

        let reminder_at = Utc::now() - Duration::minutes(1);
        let updated = service
            .update(
                task.id,
                TaskUpdate {
                    reminder_at: Some(reminder_at),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.reminder_at, Some(reminder_at));
        assert!(!updated.reminder_sent);
    }

    #[tokio::test]
    async fn test_toggle_complete_roundtrip() {
        let (service, _) = service();
        let task = service
            .create("a@x.com".to_string(), "Write report".to_string(), TaskUpdate::default())
            .await
            .unwrap();

        assert!(service.toggle_complete(task.id).await.unwrap().completed);
        assert!(!service.toggle_complete(task.id).await.unwrap().completed);
    }

    #[tokio::test]
    async fn test_delete() {
        let (service, repo) = service();
        let task = service
            .create("a@x.com".to_string(), "Write report".to_string(), TaskUpdate::default())
            .await
            .unwrap();

        service.delete(task.id).await.unwrap();
        assert!(repo.find_by_id(task.id).await.unwrap().is_none());

        let err = service.delete(task.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
