// src/consts.rs
//! Shared constants — security parameters and defaults

use crate::algo::KdfParams;

/// Argon2id tuning for all newly issued material (tag 2).
// 16 MiB, 4 passes — slower than the original config but far lighter on memory
pub const DEFAULT_KDF_PARAMS: KdfParams = KdfParams {
    m_cost: 16 * 1024,
    t_cost: 4,
    p_cost: 8,
};

/// Argon2id tuning for tag-1 records (64 MiB per call). Verification only;
/// never issued for new material.
pub const HIGH_MEMORY_KDF_PARAMS_DEPRECATED: KdfParams = KdfParams {
    m_cost: 64 * 1024,
    t_cost: 1,
    p_cost: 4,
};

/// Default size of derived symmetric keys (256-bit)
pub const DEFAULT_ENCRYPTION_KEY_SIZE: usize = 32;

/// Size of stored password digests
pub const DEFAULT_PASSWORD_HASH_SIZE: usize = 32;

/// Length of the random nonce salted into password hashes
pub const DEFAULT_NONCE_LENGTH: usize = 16;

/// Default length for newly generated salts
pub const DEFAULT_SALT_LENGTH: usize = 16;
