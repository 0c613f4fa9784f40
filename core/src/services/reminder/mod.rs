//! Due-reminder scanning and dispatch.
//!
//! A dispatch pass scans for due, unsent reminders, resolves a delivery
//! channel per task, sends through the notification gateway, and marks
//! delivery in one commit. Send failures leave the task due; the external
//! scheduler simply calls again later.

pub mod policy;

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::ReminderService;
pub use types::DispatchSummary;

// The scope type lives with the repository that interprets it
pub use crate::repositories::task::ReminderScope;
