//! Password hashing and verification (Argon2id, PHC string format).

use anyhow::anyhow;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::error::{AppError, AppResult};

/// Argon2id work-factor parameters.
#[derive(Debug, Clone, Copy)]
pub struct HashParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashParams {
    /// Production defaults (RFC 9106 low-memory recommendation).
    fn default() -> Self {
        Self {
            memory_kib: 19_456, // 19 MB
            iterations: 2,
            parallelism: 1,
        }
    }
}

/// Salted one-way hashing of credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher {
    params: HashParams,
}

impl PasswordHasher {
    pub fn new(params: HashParams) -> Self {
        Self { params }
    }

    fn argon2(&self) -> AppResult<Argon2<'static>> {
        let params = Params::new(
            self.params.memory_kib,
            self.params.iterations,
            self.params.parallelism,
            None,
        )
        .map_err(|e| AppError::Internal(anyhow!("argon2 params: {e}")))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }

    /// Hash a plaintext password into a PHC string with a fresh random salt.
    pub fn hash(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow!("hash password: {e}")))?;
        Ok(hash.to_string())
    }

    /// Verify a plaintext against a stored PHC hash.
    ///
    /// Verification recomputes the full hash with the parameters embedded in
    /// the PHC string, so run time does not depend on where a mismatch occurs.
    pub fn verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        let parsed =
            PasswordHash::new(hash).map_err(|e| AppError::Internal(anyhow!("parse hash: {e}")))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
