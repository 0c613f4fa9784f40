//! Account entity for registered users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::task::ReminderMethod;

/// Account-level default for reminder delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPreference {
    Email,
    Sms,
    Both,
}

impl From<NotificationPreference> for ReminderMethod {
    fn from(pref: NotificationPreference) -> Self {
        match pref {
            NotificationPreference::Email => ReminderMethod::Email,
            NotificationPreference::Sms => ReminderMethod::Sms,
            NotificationPreference::Both => ReminderMethod::Both,
        }
    }
}

/// A registered user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: Uuid,

    /// Normalized email; also the subject every token and task is keyed by
    pub email: String,

    /// Optional contact phone (E.164) for SMS reminders
    pub phone: Option<String>,

    /// Hashed credential; hashing itself is a capability of the
    /// infrastructure layer
    pub password_hash: String,

    /// Preferred reminder channel when a task has no override
    pub notification_preference: Option<NotificationPreference>,

    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new account from an already-normalized email and an
    /// already-hashed password
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            phone: None,
            password_hash,
            notification_preference: None,
            created_at: Utc::now(),
        }
    }
}
