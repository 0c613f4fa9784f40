//! Request and response DTOs.
//!
//! Field naming follows the original frontend contract: the auth flow
//! speaks camelCase (`resetToken`, `newPassword`), the task API speaks
//! snake_case (`user_id`, `reminder_at`).

pub mod auth;
pub mod emotion;
pub mod reminders;
pub mod tasks;
