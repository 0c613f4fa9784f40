//! Domain-specific error types and error handling.

mod reset;

pub use reset::ResetError;

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to the reset token taxonomy
    #[error(transparent)]
    Reset(#[from] ResetError),
}

pub type DomainResult<T> = Result<T, DomainError>;
