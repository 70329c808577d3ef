// ============================
// roombooker-backend-lib/src/auth/password.rs
// ============================
//! Password hashing and verification.
use crate::error::AppError;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::{rngs::OsRng, RngCore};
use zeroize::Zeroize;

/// Salt length in bytes
const SALT_BYTES: usize = 16;

/// Hash a password using Argon2id with a fresh random salt.
///
/// The salt is drawn from the OS entropy source; if that source is
/// unavailable the whole operation fails with `EntropyUnavailable`. A
/// fixed fallback salt would silently void the hashing guarantee for
/// every password hashed under it.
pub fn hash_password(plain: &str) -> Result<String, AppError> {
    let mut salt_bytes = [0u8; SALT_BYTES];
    OsRng
        .try_fill_bytes(&mut salt_bytes)
        .map_err(|_| AppError::EntropyUnavailable)?;
    let salt =
        SaltString::encode_b64(&salt_bytes).map_err(|e| AppError::Internal(e.to_string()))?;

    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(e.to_string()))?
        .to_string();
    salt_bytes.zeroize();
    Ok(hash)
}

/// Verify a password against a PHC-format hash.
///
/// The salt travels inside the hash string, and the underlying
/// comparison is constant-time, so verification needs no other input.
pub fn verify_password(hash: &str, plain: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };
    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Securely hash a password and zeroize the original
pub fn hash_password_secure(plain: &mut String) -> Result<String, AppError> {
    let hash = hash_password(plain)?;
    plain.zeroize();
    Ok(hash)
}
