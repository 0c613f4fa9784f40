//! Credential hashing capability.
//!
//! Hashing is an external primitive; any implementation (bcrypt, argon2,
//! a KMS call) can stand behind this trait without the auth service
//! noticing.

use crate::errors::DomainResult;

/// Hash and verify user passwords
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage
    fn hash(&self, password: &str) -> DomainResult<String>;

    /// Check a plaintext password against a stored hash
    fn verify(&self, password: &str, hash: &str) -> DomainResult<bool>;
}
