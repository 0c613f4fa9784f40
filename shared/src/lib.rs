//! Shared utilities and common types for the TaskPrioritize server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response envelope structures
//! - Utility functions (email/phone validation and masking, password policy)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, NotificationConfig, ServerConfig, SmtpConfig, SmsProviderConfig};
pub use types::{ApiResponse, ErrorBody};
pub use utils::{email, password, phone};
