//! Confirmation code generation and hashing
//!
//! Codes are random alphanumeric strings mailed to the user. Only an
//! Argon2id hash is ever stored.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::{distributions::Alphanumeric, Rng};

use crate::error::{AppError, AppResult};

/// Number of characters in a generated code
pub const CONFIRMATION_CODE_LENGTH: usize = 12;

/// Generate a fresh random confirmation code
pub fn generate_confirmation_code() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(CONFIRMATION_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Hash a confirmation code using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_confirmation_code(code: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(code.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Confirmation code hashing failed: {e}")))
}

/// Verify a presented code against a stored hash
///
/// # Errors
/// Returns an error if the stored hash is malformed
pub fn verify_confirmation_code(code: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid confirmation hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(code.as_bytes(), &parsed_hash)
        .is_ok())
}
