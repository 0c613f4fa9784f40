//! Email address validation, normalization and masking helpers

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

/// Check whether a string looks like an email address.
///
/// Intentionally permissive: the same shape check the frontend applies,
/// not a full RFC 5322 parser.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Normalize an email for use as a lookup key: trim and lowercase.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Mask an email address for logging, keeping the first character of the
/// local part and the full domain.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}{}@{}", first, "*".repeat(local.chars().count().saturating_sub(1)), domain)
        }
        _ => "*".repeat(email.len()),
    }
}
