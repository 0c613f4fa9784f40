//! Configuration for the password reset service

use crate::domain::entities::reset_token::{
    CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES, MAX_ATTEMPTS,
};

/// Configuration for the password reset service
#[derive(Debug, Clone)]
pub struct PasswordResetConfig {
    /// Length of the emailed verification code
    pub code_length: usize,
    /// Number of minutes before a reset token expires
    pub code_expiration_minutes: i64,
    /// Maximum number of verification attempts allowed
    pub max_attempts: u32,
}

impl Default for PasswordResetConfig {
    fn default() -> Self {
        Self {
            code_length: CODE_LENGTH,
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}
