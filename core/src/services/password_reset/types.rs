//! Types for password reset service results

use chrono::Utc;

use crate::domain::entities::reset_token::ResetToken;

/// Result of issuing a reset token
#[derive(Debug, Clone)]
pub struct IssueOutcome {
    /// The token that was created; `token.code` is what went out-of-band
    pub token: ResetToken,
    /// Whether the out-of-band email was accepted by the gateway.
    /// Issuance succeeds either way; the flag is informational.
    pub email_dispatched: bool,
}

impl IssueOutcome {
    /// Seconds until the token expires, for the API response
    pub fn expires_in_seconds(&self) -> i64 {
        (self.token.expires_at - Utc::now()).num_seconds().max(0)
    }
}
