use crate::error::{AuthError, AuthResult};

/// bcrypt cost factor used in production.
pub const HASH_COST: u32 = 10;

/// Slow one-way password hashing.
///
/// The cost is configurable so tests can run at bcrypt's minimum; anything
/// user-facing uses [`HASH_COST`].
#[derive(Clone, Debug)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a raw password. The salt is generated per call, so equal
    /// passwords produce different hashes.
    pub fn hash(&self, password: &str) -> AuthResult<String> {
        bcrypt::hash(password, self.cost).map_err(|e| AuthError::Hash(e.to_string()))
    }

    /// Compare a raw password against a stored hash.
    pub fn verify(&self, password: &str, hash: &str) -> AuthResult<bool> {
        bcrypt::verify(password, hash).map_err(|e| AuthError::Hash(e.to_string()))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(HASH_COST)
    }
}
