//! Bcrypt-backed password hashing

use tp_core::errors::{DomainError, DomainResult};
use tp_core::services::auth::PasswordHasher;

/// PasswordHasher backed by bcrypt
#[derive(Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the library's default cost
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit cost (lowered in tests)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {e}"),
        })
    }

    fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
            message: format!("Password verification failed: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hasher = BcryptPasswordHasher::with_cost(4);

        let hash = hasher.hash("Password1").unwrap();
        assert_ne!(hash, "Password1");
        assert!(hasher.verify("Password1", &hash).unwrap());
        assert!(!hasher.verify("Password2", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let hasher = BcryptPasswordHasher::with_cost(4);
        assert!(hasher.verify("Password1", "not-a-bcrypt-hash").is_err());
    }
}
