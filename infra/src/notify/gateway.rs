//! Gateway adapter over the email and SMS services.
//!
//! The core crate wants delivery outcomes, not errors: whatever the
//! underlying sender raises is logged here and reported as "not sent".
//! When a provider is not configured the gateway runs with the console
//! mocks, which always accept, so development flows still move.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::error;

use tp_core::services::notification::NotificationGateway;
use tp_shared::config::NotificationConfig;
use tp_shared::utils::email::mask_email;
use tp_shared::utils::phone::mask_phone_number;

use crate::email::{EmailService, MockEmailService, SmtpEmailService};
use crate::sms::{HttpSmsService, MockSmsService, SmsService};
use crate::InfrastructureError;

/// NotificationGateway over one email and one SMS service
pub struct ChannelGateway {
    email: Arc<dyn EmailService>,
    sms: Arc<dyn SmsService>,
}

impl ChannelGateway {
    /// Compose a gateway from explicit services
    pub fn new(email: Arc<dyn EmailService>, sms: Arc<dyn SmsService>) -> Self {
        Self { email, sms }
    }

    /// Build from configuration, substituting console mocks for any
    /// provider that is not configured
    pub fn from_config(config: &NotificationConfig) -> Result<Self, InfrastructureError> {
        let email: Arc<dyn EmailService> = match &config.smtp {
            Some(smtp) => Arc::new(SmtpEmailService::new(smtp)?),
            None => Arc::new(MockEmailService::new()),
        };

        let sms: Arc<dyn SmsService> = match &config.sms {
            Some(sms) => Arc::new(HttpSmsService::new(sms.clone())?),
            None => Arc::new(MockSmsService::new()),
        };

        tracing::info!(
            email_provider = email.provider_name(),
            sms_provider = sms.provider_name(),
            "Notification gateway configured"
        );

        Ok(Self { email, sms })
    }
}

#[async_trait]
impl NotificationGateway for ChannelGateway {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> bool {
        match self.email.send(to, subject, body).await {
            Ok(()) => true,
            Err(e) => {
                error!(
                    provider = self.email.provider_name(),
                    to = %mask_email(to),
                    error = %e,
                    event = "email_send_failed",
                    "Email delivery failed"
                );
                false
            }
        }
    }

    async fn send_sms(&self, to: &str, body: &str) -> bool {
        match self.sms.send_sms(to, body).await {
            Ok(_message_id) => true,
            Err(e) => {
                error!(
                    provider = self.sms.provider_name(),
                    to = %mask_phone_number(to),
                    error = %e,
                    event = "sms_send_failed",
                    "SMS delivery failed"
                );
                false
            }
        }
    }
}
