//! Task entity with priority, emotion and reminder scheduling fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::emotion_log::EmotionLabel;

/// Eisenhower importance axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Importance {
    Important,
    NotImportant,
}

/// Eisenhower urgency axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Urgency {
    Urgent,
    NotUrgent,
}

/// Delivery channel for a task reminder.
///
/// `Both` requires both channels to succeed before the reminder counts as
/// sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderMethod {
    Email,
    Sms,
    Both,
}

/// A user's task, with the scheduling fields the reminder dispatcher reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: Uuid,

    /// Owning account's subject (normalized email)
    pub owner: String,

    /// Task title
    pub title: String,

    pub importance: Importance,
    pub urgency: Urgency,
    pub completed: bool,

    /// Emotion label applied when the task was triaged, if any
    pub emotion_applied: Option<EmotionLabel>,

    /// When the task is due
    pub due_at: Option<DateTime<Utc>>,

    /// When the reminder should fire; `None` means no reminder
    pub reminder_at: Option<DateTime<Utc>>,

    /// Per-task channel override; `None` falls back to the account
    /// preference
    pub reminder_method: Option<ReminderMethod>,

    /// Per-task destination phone; `None` falls back to the account phone
    pub reminder_phone: Option<String>,

    /// Set only after every required channel for the resolved method
    /// succeeded
    pub reminder_sent: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with the course-app defaults
    pub fn new(owner: String, title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner,
            title,
            importance: Importance::NotImportant,
            urgency: Urgency::NotUrgent,
            completed: false,
            emotion_applied: None,
            due_at: None,
            reminder_at: None,
            reminder_method: None,
            reminder_phone: None,
            reminder_sent: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// A reminder is due when it is scheduled, unsent, and its time has
    /// passed.
    pub fn is_reminder_due(&self, now: DateTime<Utc>) -> bool {
        match self.reminder_at {
            Some(at) => !self.reminder_sent && at <= now,
            None => false,
        }
    }

    /// Reschedule the reminder. A new `reminder_at` always clears
    /// `reminder_sent` so the rescheduled reminder becomes eligible again.
    pub fn set_reminder_at(&mut self, reminder_at: Option<DateTime<Utc>>) {
        self.reminder_at = reminder_at;
        self.reminder_sent = false;
        self.touch();
    }

    /// Record a successful dispatch for the resolved method
    pub fn mark_reminder_sent(&mut self) {
        self.reminder_sent = true;
        self.touch();
    }

    /// Flip completion status
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
        self.touch();
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("a@x.com".to_string(), "Write report".to_string());

        assert_eq!(task.importance, Importance::NotImportant);
        assert_eq!(task.urgency, Urgency::NotUrgent);
        assert!(!task.completed);
        assert!(!task.reminder_sent);
        assert!(task.reminder_at.is_none());
    }

    #[test]
    fn test_reminder_due_window() {
        let now = Utc::now();
        let mut task = Task::new("a@x.com".to_string(), "Write report".to_string());

        assert!(!task.is_reminder_due(now)); // no reminder scheduled

        task.set_reminder_at(Some(now - Duration::minutes(1)));
        assert!(task.is_reminder_due(now));

        task.set_reminder_at(Some(now + Duration::minutes(5)));
        assert!(!task.is_reminder_due(now)); // not yet due
    }

    #[test]
    fn test_rescheduling_resets_sent_flag() {
        let now = Utc::now();
        let mut task = Task::new("a@x.com".to_string(), "Write report".to_string());

        task.set_reminder_at(Some(now - Duration::minutes(1)));
        task.mark_reminder_sent();
        assert!(!task.is_reminder_due(now));

        task.set_reminder_at(Some(now - Duration::seconds(30)));
        assert!(!task.reminder_sent);
        assert!(task.is_reminder_due(now));
    }

    #[test]
    fn test_reminder_method_serialization() {
        assert_eq!(serde_json::to_string(&ReminderMethod::Both).unwrap(), r#""both""#);
        assert_eq!(
            serde_json::from_str::<ReminderMethod>(r#""sms""#).unwrap(),
            ReminderMethod::Sms
        );
    }

    #[test]
    fn test_importance_wire_format() {
        assert_eq!(
            serde_json::to_string(&Importance::NotImportant).unwrap(),
            r#""not-important""#
        );
    }
}
