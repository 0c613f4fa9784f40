//! Notification provider configuration
//!
//! Email and SMS providers are optional; when a section is missing the
//! server falls back to the console-mock senders so reminder and reset
//! flows keep working in development.

use serde::{Deserialize, Serialize};
use std::env;

/// SMTP email provider settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmtpConfig {
    /// SMTP relay host
    pub host: String,
    /// SMTP port (STARTTLS)
    pub port: u16,
    /// Login username
    pub username: String,
    /// Login password (app password for Gmail)
    pub password: String,
    /// From address; defaults to the username
    pub from_address: String,
    /// Connection timeout in seconds
    pub timeout_secs: u64,
}

impl SmtpConfig {
    /// Read `SMTP_HOST`, `SMTP_PORT`, `SMTP_USER`, `SMTP_PASS`, `SMTP_FROM`.
    /// Returns `None` unless host, user and password are all present.
    pub fn from_env() -> Option<Self> {
        let host = env::var("SMTP_HOST").ok()?;
        let username = env::var("SMTP_USER").ok()?;
        let password = env::var("SMTP_PASS").ok()?;
        let from_address = env::var("SMTP_FROM").unwrap_or_else(|_| username.clone());
        Some(Self {
            host,
            port: env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(587),
            username,
            password,
            from_address,
            timeout_secs: env::var("SMTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }
}

/// SMS provider settings (Twilio-compatible REST API)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsProviderConfig {
    /// Account SID
    pub account_sid: String,
    /// Auth token
    pub auth_token: String,
    /// Sender phone number (E.164)
    pub from_number: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl SmsProviderConfig {
    /// Read `TWILIO_ACCOUNT_SID`, `TWILIO_AUTH_TOKEN` and `TWILIO_FROM`.
    /// Returns `None` unless all three are present.
    pub fn from_env() -> Option<Self> {
        Some(Self {
            account_sid: env::var("TWILIO_ACCOUNT_SID").ok()?,
            auth_token: env::var("TWILIO_AUTH_TOKEN").ok()?,
            from_number: env::var("TWILIO_FROM").ok()?,
            request_timeout_secs: env::var("TWILIO_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// Combined notification provider configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NotificationConfig {
    /// SMTP settings; `None` selects the mock email sender
    pub smtp: Option<SmtpConfig>,
    /// SMS settings; `None` selects the mock SMS sender
    pub sms: Option<SmsProviderConfig>,
}

impl NotificationConfig {
    pub fn from_env() -> Self {
        Self {
            smtp: SmtpConfig::from_env(),
            sms: SmsProviderConfig::from_env(),
        }
    }
}
