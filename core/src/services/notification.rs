//! Notification gateway abstraction.
//!
//! The gateway reports a delivery outcome, never an error: adapters are
//! expected to swallow provider failures, log them, and answer `false`.
//! Callers treat a `false` as "not sent" and decide for themselves whether
//! that matters (reminder dispatch retries on the next pass; token
//! issuance proceeds regardless).

use async_trait::async_trait;

/// Outbound email/SMS delivery, success/failure only
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Send an email. `true` means the provider accepted the message.
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> bool;

    /// Send an SMS. `true` means the provider accepted the message.
    async fn send_sms(&self, to: &str, body: &str) -> bool;
}
