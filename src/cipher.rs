// src/cipher.rs
//! The versioned cipher codec
//!
//! A `VersionedCipher` tags an opaque binary payload (and, for password
//! hashes, a nonce) with the version number of the algorithm that produced
//! it. The codec knows nothing about algorithms — tag validation happens in
//! the modules that dispatch on it.
//!
//! Text format: `v<version>.<payload>` with an optional third `.<nonce>`
//! segment, both segments URL-safe unpadded base64. The encoding is
//! deterministic and safe to store in a database column or embed in a URL
//! token.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::fmt;
use std::str::FromStr;

use crate::error::KeysError;

/// An algorithm-tagged payload, the only value this crate ever persists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedCipher {
    algo_version: u8,
    cipher: Vec<u8>,
    nonce: Option<Vec<u8>>,
}

impl VersionedCipher {
    /// Wrap `payload` with `algo_version`. The tag is not checked against
    /// any known set here.
    pub fn new(payload: Vec<u8>, algo_version: u8) -> Self {
        Self {
            algo_version,
            cipher: payload,
            nonce: None,
        }
    }

    /// Attach a nonce, returning the derived value. Only password-hash
    /// records carry one; pure salts and keys never do.
    #[must_use]
    pub fn with_nonce(mut self, nonce: Vec<u8>) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// The version tag of the algorithm that produced this value.
    pub fn algo_version(&self) -> u8 {
        self.algo_version
    }

    /// The opaque payload: salt bytes, a derived key, or a digest.
    pub fn cipher(&self) -> &[u8] {
        &self.cipher
    }

    /// The attached nonce, if any.
    pub fn nonce(&self) -> Option<&[u8]> {
        self.nonce.as_deref()
    }
}

impl fmt::Display for VersionedCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v{}.{}",
            self.algo_version,
            URL_SAFE_NO_PAD.encode(&self.cipher)
        )?;
        if let Some(nonce) = &self.nonce {
            write!(f, ".{}", URL_SAFE_NO_PAD.encode(nonce))?;
        }
        Ok(())
    }
}

impl FromStr for VersionedCipher {
    type Err = KeysError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(KeysError::Decode("cipher text is empty".into()));
        }
        let rest = s
            .strip_prefix('v')
            .ok_or_else(|| KeysError::Decode(format!("missing version prefix in {s:?}")))?;

        let mut segments = rest.splitn(3, '.');

        let algo_version = segments
            .next()
            .unwrap_or_default()
            .parse::<u8>()
            .map_err(|e| KeysError::Decode(format!("bad version tag: {e}")))?;
        if algo_version == 0 {
            return Err(KeysError::Decode("version tag must be positive".into()));
        }

        let cipher_b64 = segments
            .next()
            .ok_or_else(|| KeysError::Decode("missing payload segment".into()))?;
        let cipher = URL_SAFE_NO_PAD
            .decode(cipher_b64)
            .map_err(|e| KeysError::Decode(format!("bad payload encoding: {e}")))?;

        let nonce = match segments.next() {
            Some(nonce_b64) => Some(
                URL_SAFE_NO_PAD
                    .decode(nonce_b64)
                    .map_err(|e| KeysError::Decode(format!("bad nonce encoding: {e}")))?,
            ),
            None => None,
        };

        Ok(Self {
            algo_version,
            cipher,
            nonce,
        })
    }
}
