// src/password.rs
//! Password hashing and verification
//!
//! A stored hash is a complete, self-contained record: digest, version tag
//! and nonce all travel inside one serialized `VersionedCipher`. Verification
//! dispatches on whatever tag the record was created with, so hashes issued
//! under the deprecated configuration keep verifying indefinitely.

use log::trace;
use subtle::ConstantTimeEq;

use crate::algo::{Algo, CURRENT_KDF_ALGO};
use crate::cipher::VersionedCipher;
use crate::consts::{DEFAULT_KDF_PARAMS, DEFAULT_NONCE_LENGTH, DEFAULT_PASSWORD_HASH_SIZE};
use crate::error::KeysError;
use crate::kdf::argon2_hash;
use crate::rng::generate_random_bytes;

/// Hash `secret` with a fresh random nonce under the current parameter set.
///
/// Empty secrets are rejected outright — an empty credential must never be
/// hashed into something verifiable.
pub fn hash_password(secret: &str) -> Result<VersionedCipher, KeysError> {
    if secret.is_empty() {
        return Err(KeysError::EmptyInput);
    }
    let nonce = generate_random_bytes(DEFAULT_NONCE_LENGTH)?;
    let digest = argon2_hash(
        secret.as_bytes(),
        &nonce,
        DEFAULT_PASSWORD_HASH_SIZE,
        &DEFAULT_KDF_PARAMS,
    )?;
    Ok(VersionedCipher::new(digest, CURRENT_KDF_ALGO.version()).with_nonce(nonce))
}

/// Verify `secret` against a serialized stored hash.
///
/// Recomputes the digest with the stored nonce under whichever parameter
/// set the record's tag names, then compares in constant time. A wrong
/// secret is [`KeysError::Mismatch`]; corrupt or unknown records fail with
/// the structural errors instead.
pub fn compare_password(secret: &str, stored: &str) -> Result<(), KeysError> {
    if stored.is_empty() {
        return Err(KeysError::EmptyInput);
    }
    let record: VersionedCipher = stored.parse()?;
    let algo = Algo::from_version(record.algo_version())?;
    let params = algo
        .kdf_params()
        .ok_or(KeysError::UnknownAlgorithm(record.algo_version()))?;
    let nonce = record
        .nonce()
        .ok_or_else(|| KeysError::Decode("password record is missing its nonce".into()))?;
    trace!(
        "comparing password against algo version {}",
        record.algo_version()
    );
    let recomputed = argon2_hash(
        secret.as_bytes(),
        nonce,
        DEFAULT_PASSWORD_HASH_SIZE,
        &params,
    )?;
    if bool::from(recomputed.ct_eq(record.cipher())) {
        Ok(())
    } else {
        Err(KeysError::Mismatch)
    }
}
