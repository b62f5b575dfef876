//! Password hashing with Argon2id
//!
//! Hashes are stored in PHC string format, which carries the algorithm
//! parameters and salt alongside the digest.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use warden_domain::error::{Error, Result};

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::internal(format!("Password hashing failed: {e}")))
}

/// Verify a password against a PHC-format Argon2 hash
///
/// An empty hash never matches. A hash that does not parse is an error,
/// not a mismatch.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    if hash.is_empty() {
        return Ok(false);
    }

    let parsed = PasswordHash::new(hash)
        .map_err(|e| Error::internal(format!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
