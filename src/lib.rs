// src/lib.rs
//! versioned-keys — versioned key derivation and password hashing
//!
//! Features:
//! - Argon2id password hashing with tagged, migratable parameter sets
//! - Self-describing `VersionedCipher` text encoding (URL- and column-safe)
//! - Constant-time password verification
//! - Fast SHA-256 content fingerprinting (explicitly not for passwords)
//!
//! Every persisted value carries the version tag of the algorithm that
//! produced it, so parameter sets can be retired from *issuance* without
//! ever invalidating stored material.

pub mod algo;
pub mod cipher;
pub mod consts;
pub mod error;
pub mod fast_hash;
pub mod kdf;
pub mod password;
pub mod rng;

// Re-export everything users need at the crate root
pub use algo::{Algo, KdfParams, CURRENT_KDF_ALGO, FAST_HASH_ALGO};
pub use cipher::VersionedCipher;
pub use error::KeysError;
pub use fast_hash::{fast_hash, new_fast_salt};
pub use kdf::{derive_key, new_salt};
pub use password::{compare_password, hash_password};
pub use rng::generate_random_bytes;
