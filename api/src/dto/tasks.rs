//! Task API DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tp_core::domain::entities::emotion_log::EmotionLabel;
use tp_core::domain::entities::task::{Importance, ReminderMethod, Task, Urgency};
use tp_core::services::tasks::TaskUpdate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub importance: Option<Importance>,
    #[serde(default)]
    pub urgency: Option<Urgency>,
    #[serde(default)]
    pub emotion_applied: Option<EmotionLabel>,
    #[serde(default)]
    pub due_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reminder_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reminder_method: Option<ReminderMethod>,
    #[serde(default)]
    pub reminder_phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub importance: Option<Importance>,
    #[serde(default)]
    pub urgency: Option<Urgency>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub emotion_applied: Option<EmotionLabel>,
    #[serde(default)]
    pub due_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reminder_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reminder_method: Option<ReminderMethod>,
    #[serde(default)]
    pub reminder_phone: Option<String>,
}

impl From<UpdateTaskRequest> for TaskUpdate {
    fn from(req: UpdateTaskRequest) -> Self {
        TaskUpdate {
            title: req.title,
            importance: req.importance,
            urgency: req.urgency,
            completed: req.completed,
            emotion_applied: req.emotion_applied,
            due_at: req.due_at,
            reminder_at: req.reminder_at,
            reminder_method: req.reminder_method,
            reminder_phone: req.reminder_phone,
        }
    }
}

impl CreateTaskRequest {
    /// Attributes beyond owner and title, as a partial update
    pub fn into_attrs(self) -> TaskUpdate {
        TaskUpdate {
            title: None,
            importance: self.importance,
            urgency: self.urgency,
            completed: None,
            emotion_applied: self.emotion_applied,
            due_at: self.due_at,
            reminder_at: self.reminder_at,
            reminder_method: self.reminder_method,
            reminder_phone: self.reminder_phone,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResponse {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub importance: Importance,
    pub urgency: Urgency,
    pub completed: bool,
    pub emotion_applied: Option<EmotionLabel>,
    pub due_at: Option<DateTime<Utc>>,
    pub reminder_at: Option<DateTime<Utc>>,
    pub reminder_method: Option<ReminderMethod>,
    pub reminder_phone: Option<String>,
    pub reminder_sent: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            user_id: task.owner,
            title: task.title,
            importance: task.importance,
            urgency: task.urgency,
            completed: task.completed,
            emotion_applied: task.emotion_applied,
            due_at: task.due_at,
            reminder_at: task.reminder_at,
            reminder_method: task.reminder_method,
            reminder_phone: task.reminder_phone,
            reminder_sent: task.reminder_sent,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}
