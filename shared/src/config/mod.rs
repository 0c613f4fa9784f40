//! Configuration types for the TaskPrioritize server
//!
//! All configuration is environment-driven. Each section has a `Default`
//! suitable for local development and a `from_env()` constructor that reads
//! the corresponding variables.

mod environment;
mod notification;
mod server;

pub use environment::Environment;
pub use notification::{NotificationConfig, SmsProviderConfig, SmtpConfig};
pub use server::ServerConfig;

/// Top-level application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub notification: NotificationConfig,
}

impl AppConfig {
    /// Assemble the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            notification: NotificationConfig::from_env(),
        }
    }
}
