// src/algo.rs
//! Closed set of supported algorithms, keyed by version tag
//!
//! Dispatch is an explicit enum, not open-ended: adding an algorithm is a
//! reviewed extension of this file, and an unrecognized tag is always a
//! hard error rather than a fallback.

use crate::consts::{DEFAULT_KDF_PARAMS, HIGH_MEMORY_KDF_PARAMS_DEPRECATED};
use crate::error::KeysError;

/// Every algorithm this build recognizes, in tag order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algo {
    /// Tag 1 — the original Argon2id configuration. It turned out to be
    /// _very_ memory hungry, so it is never used for new material; it is
    /// kept solely so previously issued salts and hashes stay verifiable.
    Argon2HighMemoryDeprecated,
    /// Tag 2 — the current Argon2id configuration: slower, but much
    /// lighter on memory. All new salts and password hashes use this.
    Argon2,
    /// Tag 3 — single-round SHA-256 for content fingerprinting.
    /// Not suitable for passwords.
    Sha256Fast,
}

/// The tag written into all newly issued KDF salts and password hashes.
pub const CURRENT_KDF_ALGO: Algo = Algo::Argon2;

/// The tag written into newly issued fast-hash salts.
pub const FAST_HASH_ALGO: Algo = Algo::Sha256Fast;

/// Argon2id tuning record, one immutable instance per memory-hard tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// Memory cost in KiB.
    pub m_cost: u32,
    /// Number of passes.
    pub t_cost: u32,
    /// Degree of parallelism (lanes).
    pub p_cost: u32,
}

impl Algo {
    /// The wire tag for this algorithm.
    pub const fn version(self) -> u8 {
        match self {
            Algo::Argon2HighMemoryDeprecated => 1,
            Algo::Argon2 => 2,
            Algo::Sha256Fast => 3,
        }
    }

    /// Resolve a parsed tag, rejecting anything outside the known set.
    pub fn from_version(version: u8) -> Result<Self, KeysError> {
        match version {
            1 => Ok(Algo::Argon2HighMemoryDeprecated),
            2 => Ok(Algo::Argon2),
            3 => Ok(Algo::Sha256Fast),
            other => Err(KeysError::UnknownAlgorithm(other)),
        }
    }

    /// Tuning record for the memory-hard family; `None` for the fast
    /// digest, which takes no parameters.
    pub const fn kdf_params(self) -> Option<KdfParams> {
        match self {
            Algo::Argon2HighMemoryDeprecated => Some(HIGH_MEMORY_KDF_PARAMS_DEPRECATED),
            Algo::Argon2 => Some(DEFAULT_KDF_PARAMS),
            Algo::Sha256Fast => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_mapping_round_trips() {
        for algo in [Algo::Argon2HighMemoryDeprecated, Algo::Argon2, Algo::Sha256Fast] {
            assert_eq!(Algo::from_version(algo.version()).unwrap(), algo);
        }
    }

    #[test]
    fn test_unknown_tags_are_rejected() {
        for version in [0u8, 4, 9, 255] {
            assert!(matches!(
                Algo::from_version(version),
                Err(KeysError::UnknownAlgorithm(v)) if v == version
            ));
        }
    }

    #[test]
    fn test_deprecated_params_are_hungrier_and_narrower() {
        let current = Algo::Argon2.kdf_params().unwrap();
        let deprecated = Algo::Argon2HighMemoryDeprecated.kdf_params().unwrap();
        assert!(deprecated.m_cost > current.m_cost);
        assert!(deprecated.p_cost < current.p_cost);
    }

    #[test]
    fn test_fast_algo_has_no_kdf_params() {
        assert!(Algo::Sha256Fast.kdf_params().is_none());
    }
}
