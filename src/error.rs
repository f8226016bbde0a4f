// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

/// The error type for all versioned-keys operations.
///
/// Every variant is surfaced to the caller; nothing is swallowed or
/// converted into a default success.
#[derive(Error, Debug)]
pub enum KeysError {
    /// The operating system CSPRNG could not produce bytes.
    #[error("secure randomness unavailable: {0}")]
    Randomness(String),

    /// Serialized cipher text was empty or structurally invalid.
    #[error("could not decode versioned cipher: {0}")]
    Decode(String),

    /// A parsed version tag matches no algorithm this build recognizes.
    /// There is deliberately no fallback algorithm.
    #[error("unknown algo version {0}")]
    UnknownAlgorithm(u8),

    /// An empty secret (or empty stored hash) was supplied where a
    /// non-empty one is required.
    #[error("input must not be empty")]
    EmptyInput,

    /// A well-formed comparison in which the secret did not match the
    /// stored digest. Distinct from the structural errors above so callers
    /// can tell "wrong password" from "corrupt record".
    #[error("could not match passwords")]
    Mismatch,

    /// The Argon2 backend rejected its inputs.
    #[error("key derivation failed: {0}")]
    Derivation(String),
}
