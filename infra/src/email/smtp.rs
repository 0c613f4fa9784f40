//! SMTP Email Service Implementation
//!
//! Sends plain-text mail through an SMTP relay with STARTTLS, the way the
//! course deployments use a Gmail app password.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use tracing::{error, info};

use tp_shared::config::SmtpConfig;
use tp_shared::utils::email::mask_email;

use super::EmailService;
use crate::InfrastructureError;

/// Email service backed by an SMTP relay
pub struct SmtpEmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpEmailService {
    /// Create a new SMTP email service from configuration
    pub fn new(config: &SmtpConfig) -> Result<Self, InfrastructureError> {
        let from: Mailbox = config
            .from_address
            .parse()
            .map_err(|_| InfrastructureError::Config(format!(
                "Invalid SMTP from address: {}",
                config.from_address
            )))?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| InfrastructureError::Config(format!("SMTP relay setup failed: {e}")))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(Duration::from_secs(config.timeout_secs)))
            .build();

        Ok(Self { mailer, from })
    }
}

#[async_trait]
impl EmailService for SmtpEmailService {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), InfrastructureError> {
        let to_mailbox: Mailbox = to
            .parse()
            .map_err(|_| InfrastructureError::Email(format!("Invalid recipient: {}", mask_email(to))))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to_mailbox)
            .subject(subject)
            .body(body.to_string())
            .map_err(|e| InfrastructureError::Email(format!("Message build failed: {e}")))?;

        match self.mailer.send(message).await {
            Ok(_) => {
                info!(
                    target: "email_service",
                    provider = "smtp",
                    to = %mask_email(to),
                    subject = subject,
                    "Email sent"
                );
                Ok(())
            }
            Err(e) => {
                error!(
                    target: "email_service",
                    provider = "smtp",
                    to = %mask_email(to),
                    error = %e,
                    "SMTP send failed"
                );
                Err(InfrastructureError::Email(e.to_string()))
            }
        }
    }

    fn provider_name(&self) -> &str {
        "SMTP"
    }
}
