// src/rng.rs
//! Fallible secure randomness
//!
//! Salts and nonces come straight from the operating system CSPRNG. Failure
//! to obtain bytes is surfaced as [`KeysError::Randomness`], never papered
//! over with a weaker source.

use rand::{rngs::OsRng, TryRngCore};

use crate::error::KeysError;

/// Fill a fresh buffer with `len` bytes from the OS CSPRNG.
pub fn generate_random_bytes(len: usize) -> Result<Vec<u8>, KeysError> {
    let mut bytes = vec![0u8; len];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| KeysError::Randomness(e.to_string()))?;
    Ok(bytes)
}
