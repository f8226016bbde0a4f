// src/kdf.rs
//! Argon2id key derivation with versioned dispatch
//!
//! A salt's version tag picks the parameter set. Both memory-hard tags stay
//! derivable forever — a key derived from an old salt must remain
//! reproducible — but new salts only ever carry the current tag.

use argon2::Argon2;
use log::trace;

use crate::algo::{Algo, KdfParams, CURRENT_KDF_ALGO};
use crate::cipher::VersionedCipher;
use crate::error::KeysError;
use crate::rng::generate_random_bytes;

/// Derive a `key_size`-byte symmetric key from `secret` and a serialized
/// versioned salt.
///
/// The salt's tag selects the Argon2id parameter set; a fast-hash or
/// unknown tag is a hard error, never a fallback.
pub fn derive_key(
    secret: &str,
    versioned_salt: &str,
    key_size: usize,
) -> Result<Vec<u8>, KeysError> {
    let salt: VersionedCipher = versioned_salt.parse()?;
    let algo = Algo::from_version(salt.algo_version())?;
    let params = algo
        .kdf_params()
        .ok_or(KeysError::UnknownAlgorithm(salt.algo_version()))?;
    trace!(
        "deriving {key_size}-byte key with algo version {}",
        salt.algo_version()
    );
    argon2_hash(secret.as_bytes(), salt.cipher(), key_size, &params)
}

/// Generate `len` securely random salt bytes wrapped with the current
/// memory-hard tag.
pub fn new_salt(len: usize) -> Result<VersionedCipher, KeysError> {
    let bytes = generate_random_bytes(len)?;
    Ok(VersionedCipher::new(bytes, CURRENT_KDF_ALGO.version()))
}

/// Raw Argon2id invocation shared by key derivation and password hashing.
pub(crate) fn argon2_hash(
    value: &[u8],
    salt: &[u8],
    size: usize,
    params: &KdfParams,
) -> Result<Vec<u8>, KeysError> {
    let argon2_params = argon2::Params::new(params.m_cost, params.t_cost, params.p_cost, Some(size))
        .map_err(|e| KeysError::Derivation(e.to_string()))?;
    let argon2 = Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        argon2_params,
    );
    let mut out = vec![0u8; size];
    argon2
        .hash_password_into(value, salt, &mut out)
        .map_err(|e| KeysError::Derivation(e.to_string()))?;
    Ok(out)
}
