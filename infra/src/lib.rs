//! # TaskPrioritize Infrastructure
//!
//! Concrete implementations behind the core crate's interfaces: in-memory
//! stores, email and SMS senders, the notification gateway, password
//! hashing, and the mock emotion classifier.

pub mod classifier;
pub mod email;
pub mod notify;
pub mod password;
pub mod sms;
pub mod store;

use thiserror::Error;

/// Errors raised by infrastructure adapters
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Email error: {0}")]
    Email(String),

    #[error("SMS error: {0}")]
    Sms(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

// Re-export commonly used implementations
pub use classifier::MockEmotionClassifier;
pub use email::{EmailService, MockEmailService, SmtpEmailService};
pub use notify::ChannelGateway;
pub use password::BcryptPasswordHasher;
pub use sms::{HttpSmsService, MockSmsService, SmsService};
pub use store::{
    InMemoryAccountRepository, InMemoryEmotionLogRepository, InMemoryTaskRepository,
    InMemoryTokenStore,
};
