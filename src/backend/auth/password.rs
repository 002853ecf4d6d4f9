/**
 * Password Hashing
 *
 * bcrypt hashing and verification for admin passwords.
 *
 * bcrypt at `DEFAULT_COST` takes a few hundred milliseconds, so every call
 * runs on tokio's blocking pool via `spawn_blocking` instead of a worker
 * thread.
 *
 * `verify_password` never fails on user input: a wrong password and a
 * corrupted stored hash both come back as `false`, the latter with an error
 * log so operators can see it.
 */

use std::sync::OnceLock;

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::backend::error::BackendError;

/// Hash a plaintext password with a fresh salt
///
/// # Errors
///
/// Only on an internal bcrypt failure (e.g. the OS RNG is unavailable) or a
/// panicked hashing task, reported as an infrastructure error.
pub async fn hash_password(plaintext: &str) -> Result<String, BackendError> {
    let plaintext = plaintext.to_string();

    tokio::task::spawn_blocking(move || hash(plaintext, DEFAULT_COST))
        .await
        .map_err(|e| {
            tracing::error!("Password hashing task failed: {}", e);
            BackendError::infrastructure("Could not hash password")
        })?
        .map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            BackendError::infrastructure("Could not hash password")
        })
}

/// Check a plaintext password against a stored bcrypt hash
pub async fn verify_password(stored_hash: &str, plaintext: &str) -> bool {
    let stored_hash = stored_hash.to_string();
    let plaintext = plaintext.to_string();

    match tokio::task::spawn_blocking(move || verify(plaintext, &stored_hash)).await {
        Ok(Ok(valid)) => valid,
        Ok(Err(e)) => {
            tracing::error!("Password verification error: {:?}", e);
            false
        }
        Err(e) => {
            tracing::error!("Password verification task failed: {}", e);
            false
        }
    }
}

/// Spend the same bcrypt work as a real verification, then fail
///
/// Used by login when the email is unknown so both failure paths cost the
/// same.
pub async fn verify_against_dummy(plaintext: &str) {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

    let plaintext = plaintext.to_string();
    let result = tokio::task::spawn_blocking(move || {
        let dummy = DUMMY_HASH.get_or_init(|| hash("dummy-password-for-timing", DEFAULT_COST).ok());
        if let Some(dummy) = dummy {
            let _ = verify(plaintext, dummy);
        }
    })
    .await;

    if let Err(e) = result {
        tracing::error!("Dummy verification task failed: {}", e);
    }
}
