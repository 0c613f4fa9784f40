//! SMS delivery services.

mod http;
mod mock;

use async_trait::async_trait;

use crate::InfrastructureError;

pub use http::HttpSmsService;
pub use mock::MockSmsService;

/// SMS sending contract
///
/// Implementations include:
/// - Twilio-compatible REST API (production)
/// - Mock implementation printing to the console (development)
#[async_trait]
pub trait SmsService: Send + Sync {
    /// Send an SMS message to a phone number (E.164 format)
    ///
    /// # Returns
    /// * `Ok(message_id)` - Provider identifier for the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_sms(&self, phone_number: &str, message: &str)
        -> Result<String, InfrastructureError>;

    /// Get the service provider name
    fn provider_name(&self) -> &str;
}
