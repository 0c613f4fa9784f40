//! One-time code and correlation token generation.
//!
//! Both draw from the OS CSPRNG. The code is a short human-enterable
//! secret; the correlation token is a long machine handle. They are never
//! derived from each other.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::Rng;

/// Number of random bytes behind a correlation token (256 bits)
const CORRELATION_TOKEN_BYTES: usize = 32;

/// Generate a numeric one-time code of `length` digits.
///
/// Each digit is drawn independently and uniformly, so leading zeros are
/// as likely as any other digit.
pub fn generate_code(length: usize) -> String {
    let mut rng = OsRng;
    (0..length).map(|_| char::from(b'0' + rng.gen_range(0..10u8))).collect()
}

/// Generate an opaque, URL-safe correlation token with 256 bits of entropy.
pub fn generate_correlation_token() -> String {
    let mut bytes = [0u8; CORRELATION_TOKEN_BYTES];
    OsRng.fill(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
