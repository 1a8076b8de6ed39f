//! Password value object: argon2 hashing and verification.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{DomainError, DomainResult};

/// A stored password hash.
///
/// Construction hashes with a fresh random salt; `verify` compares through
/// the argon2 verifier, which is constant-time by construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

// Keep the hash out of debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}

impl Password {
    /// Hash a cleartext password.
    pub fn new(cleartext: &str) -> DomainResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(cleartext.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("password hashing failed: {e}")))?;
        Ok(Self(hash.to_string()))
    }

    /// Wrap an already-stored hash string.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Verify a cleartext candidate against this hash.
    ///
    /// An unparseable stored hash verifies as false rather than erroring:
    /// a corrupt hash must never authenticate.
    pub fn verify(&self, cleartext: &str) -> bool {
        PasswordHash::new(&self.0)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(cleartext.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    /// Consume into the stored hash string.
    pub fn into_string(self) -> String {
        self.0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
