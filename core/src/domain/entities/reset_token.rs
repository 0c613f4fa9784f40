//! Reset token entity for the email-based password-reset flow.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};

use crate::errors::ResetError;
use crate::services::codegen;

/// Length of the emailed verification code
pub const CODE_LENGTH: usize = 6;

/// Maximum number of verification attempts allowed
pub const MAX_ATTEMPTS: u32 = 5;

/// Default expiration time for reset tokens (1 hour)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 60;

/// One-time verification token bound to a subject (normalized email).
///
/// At most one live token exists per subject; issuing a new one replaces
/// the previous record wholesale. `subject`, `code`, `correlation_token`
/// and the timestamps are fixed at creation; only `attempts` and
/// `verified` mutate afterwards, and `verified` never goes back to false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetToken {
    /// Identity the token is bound to
    pub subject: String,

    /// The short numeric secret delivered out-of-band
    pub code: String,

    /// Opaque handle returned to the client; unguessable but not a secret
    /// equivalent of `code`
    pub correlation_token: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Whether the correct code has been supplied
    pub verified: bool,

    /// Number of verification attempts made
    pub attempts: u32,

    /// Attempt cap for this token
    pub max_attempts: u32,
}

impl ResetToken {
    /// Creates a new reset token with a random code and correlation handle
    pub fn new(subject: String) -> Self {
        Self::new_with_expiration(subject, DEFAULT_EXPIRATION_MINUTES)
    }

    /// Creates a new reset token with a custom expiration time
    pub fn new_with_expiration(subject: String, expiration_minutes: i64) -> Self {
        let now = Utc::now();

        Self {
            subject,
            code: codegen::generate_code(CODE_LENGTH),
            correlation_token: codegen::generate_correlation_token(),
            created_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
            verified: false,
            attempts: 0,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Checks if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Constant-time comparison against a submitted code
    pub fn matches_code(&self, submitted: &str) -> bool {
        self.code.len() == submitted.len()
            && constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }

    /// Verifies a submitted code against this token.
    ///
    /// Attempt accounting is deliberately asymmetric and must stay that
    /// way: the counter increments on every try including the winning one,
    /// and hitting the cap reports `AttemptsExhausted` without consuming a
    /// further attempt. Expiry is the caller's check; a token past its cap
    /// lives on until it expires or is replaced.
    pub fn verify(&mut self, submitted: &str) -> Result<(), ResetError> {
        if self.attempts >= self.max_attempts {
            return Err(ResetError::AttemptsExhausted);
        }

        self.attempts += 1;

        if self.matches_code(submitted) {
            self.verified = true;
            Ok(())
        } else {
            Err(ResetError::InvalidCode {
                remaining: self.max_attempts - self.attempts,
            })
        }
    }

    /// Gets the number of remaining verification attempts
    pub fn remaining_attempts(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts)
    }

    /// Whether the guarded action may be finalized with this token:
    /// verified, correct code, not expired.
    pub fn is_consumable(&self, submitted: &str) -> bool {
        self.verified && !self.is_expired() && self.matches_code(submitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> ResetToken {
        ResetToken::new("a@x.com".to_string())
    }

    #[test]
    fn test_new_reset_token() {
        let token = token();

        assert_eq!(token.subject, "a@x.com");
        assert_eq!(token.code.len(), CODE_LENGTH);
        assert!(token.code.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(token.attempts, 0);
        assert!(!token.verified);
        assert!(!token.is_expired());
        assert_eq!(token.expires_at, token.created_at + Duration::minutes(DEFAULT_EXPIRATION_MINUTES));
    }

    #[test]
    fn test_code_and_correlation_token_are_independent() {
        let token = token();
        assert!(!token.correlation_token.contains(&token.code));
        assert!(token.correlation_token.len() >= 43); // 32 bytes, base64
    }

    #[test]
    fn test_verify_success_counts_attempt() {
        let mut token = token();
        let code = token.code.clone();

        assert!(token.verify(&code).is_ok());
        assert!(token.verified);
        // The winning guess still consumes an attempt
        assert_eq!(token.attempts, 1);
    }

    #[test]
    fn test_verify_failure_reports_remaining() {
        let mut token = token();

        let err = token.verify("000000").unwrap_err();
        assert_eq!(err, ResetError::InvalidCode { remaining: MAX_ATTEMPTS - 1 });
        assert!(!token.verified);
        assert_eq!(token.attempts, 1);
    }

    #[test]
    fn test_exhaustion_blocks_even_the_correct_code() {
        let mut token = token();
        let code = token.code.clone();

        for _ in 0..MAX_ATTEMPTS {
            assert!(token.verify("000000").is_err());
        }
        assert_eq!(token.attempts, MAX_ATTEMPTS);

        assert_eq!(token.verify(&code).unwrap_err(), ResetError::AttemptsExhausted);
        // The cap check happens before the increment
        assert_eq!(token.attempts, MAX_ATTEMPTS);
    }

    #[test]
    fn test_verified_never_reverts() {
        let mut token = token();
        let code = token.code.clone();

        token.verify(&code).unwrap();
        let _ = token.verify("000000");
        assert!(token.verified);
    }

    #[test]
    fn test_is_consumable() {
        let mut token = token();
        let code = token.code.clone();

        assert!(!token.is_consumable(&code)); // not yet verified
        token.verify(&code).unwrap();
        assert!(token.is_consumable(&code));
        assert!(!token.is_consumable("999999"));
    }

    #[test]
    fn test_expired_token() {
        let mut token = ResetToken::new_with_expiration("a@x.com".to_string(), 0);
        let code = token.code.clone();

        std::thread::sleep(std::time::Duration::from_millis(10));
        assert!(token.is_expired());

        token.verify(&code).unwrap();
        assert!(!token.is_consumable(&code));
    }

    #[test]
    fn test_matches_code_handles_length_mismatch() {
        let token = token();
        assert!(!token.matches_code(""));
        assert!(!token.matches_code("12345678"));
    }
}
