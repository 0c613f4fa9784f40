//! Password reset token lifecycle.
//!
//! State machine per subject: `Issued -> PartiallyVerified -> Verified ->
//! Consumed`, with `Expired` reachable from any non-terminal state. Expiry
//! is detected lazily at each operation; there is no background timer.

mod config;
mod locks;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::PasswordResetConfig;
pub use service::PasswordResetService;
pub use types::IssueOutcome;
