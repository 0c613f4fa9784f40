//! Business services containing domain logic and use cases.

pub mod auth;
pub mod codegen;
pub mod emotion;
pub mod notification;
pub mod password_reset;
pub mod reminder;
pub mod tasks;

// Re-export commonly used types
pub use auth::{AuthService, PasswordHasher};
pub use emotion::{Classification, EmotionClassifier, EmotionService, ScanOutcome};
pub use notification::NotificationGateway;
pub use password_reset::{IssueOutcome, PasswordResetConfig, PasswordResetService};
pub use reminder::{DispatchSummary, ReminderService};
pub use tasks::{TaskService, TaskUpdate};
