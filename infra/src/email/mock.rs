//! Mock Email Service Implementation
//!
//! Prints messages to the console instead of sending them, so the reset
//! and reminder flows work on a laptop with no SMTP credentials. The
//! emailed reset code is read straight off the server console during
//! development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

use tp_shared::utils::email::mask_email;

use super::EmailService;
use crate::InfrastructureError;

/// Mock email service for development and testing
#[derive(Clone, Default)]
pub struct MockEmailService {
    /// Counter for messages "sent"
    message_count: Arc<AtomicU64>,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailService for MockEmailService {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), InfrastructureError> {
        self.message_count.fetch_add(1, Ordering::SeqCst);

        println!("\n=== EMAIL (MOCK) ===");
        println!("To: {to}");
        println!("Subject: {subject}");
        println!("Body: {body}");
        println!("====================\n");

        info!(
            target: "email_service",
            provider = "mock",
            to = %mask_email(to),
            subject = subject,
            "Email sent (mock)"
        );

        Ok(())
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
