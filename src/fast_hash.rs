// src/fast_hash.rs
//! Fast, salted content fingerprinting
//!
//! Single-round SHA-256 over `value || salt` — cheap and deterministic,
//! with **no** memory or time hardness. Never use this for passwords; that
//! is what [`crate::password`] is for.

use sha2::{Digest, Sha256};

use crate::algo::{Algo, FAST_HASH_ALGO};
use crate::cipher::VersionedCipher;
use crate::error::KeysError;
use crate::rng::generate_random_bytes;

/// Hash `value` with the given fast-hash salt, returning lowercase hex.
///
/// The salt must carry the fast-digest tag; memory-hard salts are rejected
/// so the two families can never be confused.
pub fn fast_hash(value: &str, versioned_salt: &str) -> Result<String, KeysError> {
    let salt: VersionedCipher = versioned_salt.parse()?;
    match Algo::from_version(salt.algo_version())? {
        Algo::Sha256Fast => {
            let mut hasher = Sha256::new();
            hasher.update(value.as_bytes());
            hasher.update(salt.cipher());
            Ok(hex::encode(hasher.finalize()))
        }
        other => Err(KeysError::UnknownAlgorithm(other.version())),
    }
}

/// Generate `len` securely random salt bytes wrapped with the fast-digest
/// tag.
pub fn new_fast_salt(len: usize) -> Result<VersionedCipher, KeysError> {
    let bytes = generate_random_bytes(len)?;
    Ok(VersionedCipher::new(bytes, FAST_HASH_ALGO.version()))
}
