//! Twilio-compatible REST SMS implementation.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{error, info};

use tp_shared::config::SmsProviderConfig;
use tp_shared::utils::phone::{is_valid_phone_number, mask_phone_number};

use super::SmsService;
use crate::InfrastructureError;

/// SMS service calling the provider's Messages endpoint over HTTPS
pub struct HttpSmsService {
    client: reqwest::Client,
    config: SmsProviderConfig,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    sid: String,
}

impl HttpSmsService {
    /// Create a new REST SMS service from configuration
    pub fn new(config: SmsProviderConfig) -> Result<Self, InfrastructureError> {
        if !config.from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "SMS from number must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| InfrastructureError::Config(format!("HTTP client setup failed: {e}")))?;

        Ok(Self { client, config })
    }

    fn messages_url(&self) -> String {
        format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.config.account_sid
        )
    }
}

#[async_trait]
impl SmsService for HttpSmsService {
    async fn send_sms(
        &self,
        phone_number: &str,
        message: &str,
    ) -> Result<String, InfrastructureError> {
        if !is_valid_phone_number(phone_number) {
            return Err(InfrastructureError::Sms(format!(
                "Invalid phone number format: {}",
                mask_phone_number(phone_number)
            )));
        }

        let params = [
            ("To", phone_number),
            ("From", self.config.from_number.as_str()),
            ("Body", message),
        ];

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                error!(
                    target: "sms_service",
                    provider = "twilio",
                    phone = %mask_phone_number(phone_number),
                    error = %e,
                    "SMS request failed"
                );
                InfrastructureError::Sms(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(
                target: "sms_service",
                provider = "twilio",
                phone = %mask_phone_number(phone_number),
                status = %status,
                "SMS provider rejected the message"
            );
            return Err(InfrastructureError::Sms(format!(
                "Provider returned {status}: {body}"
            )));
        }

        let message_response: MessageResponse = response
            .json()
            .await
            .map_err(|e| InfrastructureError::Sms(format!("Malformed provider response: {e}")))?;

        info!(
            target: "sms_service",
            provider = "twilio",
            phone = %mask_phone_number(phone_number),
            message_id = %message_response.sid,
            "SMS sent"
        );

        Ok(message_response.sid)
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}
