//! Argon2id password hashing.
//!
//! Both functions are CPU bound; async callers run them on a blocking thread.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::{auth::AuthError, Error};

/// Hashes a password with Argon2id & a random salt, returning the PHC string to store
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC string
///
/// # Returns
/// - `Ok(true)`: Password matches
/// - `Ok(false)`: Password does not match
/// - `Err(Error::AuthError(AuthError::PasswordHash))`: Stored hash is malformed
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, Error> {
    let parsed =
        PasswordHash::new(password_hash).map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::PasswordHash(e.to_string()).into()),
    }
}
