//! Password hashing with Argon2id.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::errors::{DomainError, DomainResult};

/// Memory cost in KiB (64 MiB)
const MEMORY_COST_KIB: u32 = 65_536;

/// Number of passes over memory
const TIME_COST: u32 = 16;

/// Argon2id password hasher
///
/// Lanes match the available CPU parallelism. A malformed stored digest is
/// an internal error (fail closed); a clean mismatch is just `false`.
#[derive(Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Creates a hasher with production parameters
    pub fn new() -> DomainResult<Self> {
        let parallelism = std::thread::available_parallelism()
            .map(|n| n.get() as u32)
            .unwrap_or(1);
        Self::with_params(MEMORY_COST_KIB, TIME_COST, parallelism)
    }

    /// Creates a hasher with explicit cost parameters
    ///
    /// Tests use cheap parameters; production goes through [`Self::new`].
    pub fn with_params(memory_kib: u32, passes: u32, lanes: u32) -> DomainResult<Self> {
        let params =
            Params::new(memory_kib, passes, lanes, None).map_err(|e| DomainError::Internal {
                message: format!("Invalid Argon2 parameters: {}", e),
            })?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'_> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a plaintext password into a PHC-format digest
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|e| DomainError::Internal {
                message: format!("Password hashing failed: {}", e),
            })
    }

    /// Verifies a plaintext password against a stored digest
    pub fn verify(&self, digest: &str, plaintext: &str) -> DomainResult<bool> {
        let parsed = PasswordHash::new(digest).map_err(|e| DomainError::Internal {
            message: format!("Malformed password digest: {}", e),
        })?;

        match self.argon2().verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(DomainError::Internal {
                message: format!("Password verification failed: {}", e),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap_hasher() -> PasswordHasher {
        PasswordHasher::with_params(1024, 2, 1).unwrap()
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hasher = cheap_hasher();
        let digest = hasher.hash("hunter2").unwrap();

        assert!(digest.starts_with("$argon2id$"));
        assert!(hasher.verify(&digest, "hunter2").unwrap());
        assert!(!hasher.verify(&digest, "hunter3").unwrap());
    }

    #[test]
    fn test_malformed_digest_is_internal_error() {
        let hasher = cheap_hasher();
        let err = hasher.verify("not-a-digest", "hunter2").unwrap_err();

        assert!(matches!(err, DomainError::Internal { .. }));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = cheap_hasher();
        let a = hasher.hash("same-password").unwrap();
        let b = hasher.hash("same-password").unwrap();

        assert_ne!(a, b);
    }
}
