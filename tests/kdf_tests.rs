// tests/kdf_tests.rs
use versioned_keys::consts::DEFAULT_ENCRYPTION_KEY_SIZE;
use versioned_keys::{derive_key, new_salt, KeysError, VersionedCipher, CURRENT_KDF_ALGO};

const SALT_BYTES: &[u8] = b"0123456789abcdef";

#[test]
fn test_new_salt_uses_current_tag_and_length() {
    let salt = new_salt(16).unwrap();
    assert_eq!(salt.algo_version(), CURRENT_KDF_ALGO.version());
    assert_eq!(salt.cipher().len(), 16);
    assert_eq!(salt.nonce(), None);
}

#[test]
fn test_derive_key_is_deterministic() {
    let salt = VersionedCipher::new(SALT_BYTES.to_vec(), 2).to_string();
    let a = derive_key("hunter2", &salt, DEFAULT_ENCRYPTION_KEY_SIZE).unwrap();
    let b = derive_key("hunter2", &salt, DEFAULT_ENCRYPTION_KEY_SIZE).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), DEFAULT_ENCRYPTION_KEY_SIZE);
}

#[test]
fn test_derive_key_depends_on_secret_and_salt() {
    let salt_a = VersionedCipher::new(SALT_BYTES.to_vec(), 2).to_string();
    let salt_b = VersionedCipher::new(b"fedcba9876543210".to_vec(), 2).to_string();

    let base = derive_key("hunter2", &salt_a, 32).unwrap();
    assert_ne!(derive_key("hunter3", &salt_a, 32).unwrap(), base);
    assert_ne!(derive_key("hunter2", &salt_b, 32).unwrap(), base);
}

#[test]
fn test_cross_algorithm_isolation() {
    // Same secret, same salt bytes — the tag alone must change the key.
    let deprecated = VersionedCipher::new(SALT_BYTES.to_vec(), 1).to_string();
    let current = VersionedCipher::new(SALT_BYTES.to_vec(), 2).to_string();
    assert_ne!(
        derive_key("hunter2", &deprecated, 32).unwrap(),
        derive_key("hunter2", &current, 32).unwrap()
    );
}

#[test]
fn test_deprecated_salt_still_derives() {
    let salt = VersionedCipher::new(SALT_BYTES.to_vec(), 1).to_string();
    let key = derive_key("hunter2", &salt, 32).unwrap();
    assert_eq!(key.len(), 32);
    assert_eq!(derive_key("hunter2", &salt, 32).unwrap(), key);
}

#[test]
fn test_requested_key_size_is_honored() {
    let salt = VersionedCipher::new(SALT_BYTES.to_vec(), 2).to_string();
    assert_eq!(derive_key("hunter2", &salt, 16).unwrap().len(), 16);
    assert_eq!(derive_key("hunter2", &salt, 64).unwrap().len(), 64);
}

#[test]
fn test_fast_hash_salt_is_rejected_for_derivation() {
    let salt = VersionedCipher::new(SALT_BYTES.to_vec(), 3).to_string();
    assert!(matches!(
        derive_key("hunter2", &salt, 32),
        Err(KeysError::UnknownAlgorithm(3))
    ));
}

#[test]
fn test_unknown_tag_is_rejected_for_derivation() {
    let salt = VersionedCipher::new(SALT_BYTES.to_vec(), 9).to_string();
    assert!(matches!(
        derive_key("hunter2", &salt, 32),
        Err(KeysError::UnknownAlgorithm(9))
    ));
}

#[test]
fn test_malformed_salt_is_decode_error() {
    assert!(matches!(
        derive_key("hunter2", "not-a-real-cipher", 32),
        Err(KeysError::Decode(_))
    ));
}
