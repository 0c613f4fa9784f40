//! Error taxonomy for the password-reset token lifecycle
//!
//! Every variant is an expected, user-facing condition. The engine never
//! panics or raises an untyped fault for a missing token or a wrong code.

use thiserror::Error;

/// Outcomes of reset-token operations that are not success
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResetError {
    /// No reset request exists for this subject
    #[error("No reset request found")]
    NotFound,

    /// The token's expiry has passed; the record is purged on detection
    #[error("Reset code expired")]
    Expired,

    /// The attempt cap was reached. The record is retained until it
    /// expires or is superseded; only expiry purges.
    #[error("Too many attempts. Request a new code.")]
    AttemptsExhausted,

    /// Wrong code; one attempt was consumed
    #[error("Invalid code. Attempts left: {remaining}")]
    InvalidCode { remaining: u32 },

    /// Finalize precondition unmet (missing record, unverified token or
    /// code mismatch)
    #[error("Invalid or expired reset request")]
    InvalidRequest,
}
