use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use error_location::ErrorLocation;
use rand::RngCore;

/// Argon2id hashing with a random 16-byte salt per password.
/// Both operations are CPU-bound; async callers should run them on a blocking thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    #[track_caller]
    pub fn hash(&self, password: &str) -> AuthErrorResult<String> {
        let caller = Location::caller();
        let mut salt_bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut salt_bytes);

        let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(caller),
        })?;

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::PasswordHash {
                message: e.to_string(),
                location: ErrorLocation::from(caller),
            })
    }

    /// `Ok(false)` on mismatch; `Err` only when the stored hash is malformed
    #[track_caller]
    pub fn verify(&self, password: &str, hash: &str) -> AuthErrorResult<bool> {
        let parsed = PasswordHash::new(hash).map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
