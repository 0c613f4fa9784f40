//! Email delivery services.

mod mock;
mod smtp;

use async_trait::async_trait;

use crate::InfrastructureError;

pub use mock::MockEmailService;
pub use smtp::SmtpEmailService;

/// Email sending contract
///
/// Implementations include:
/// - SMTP relay (production)
/// - Mock implementation printing to the console (development)
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send a plain-text email
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), InfrastructureError>;

    /// Get the service provider name
    fn provider_name(&self) -> &str;
}
