//! HMAC-SHA256 key generation, tag computation, and verification.
//!
//! Tags travel as 64-character lowercase hex strings. Verification decodes
//! the candidate and compares against the recomputed digest in constant
//! time; candidates that are not valid hex of the right length simply fail
//! verification. Verification never errors on attacker-controlled input.

use hmac::{Hmac, Mac};
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::error::MacError;

type HmacSha256 = Hmac<Sha256>;

/// Default key length in bytes (256 bits).
pub const DEFAULT_KEY_LEN: usize = 32;

/// A reusable secret key for HMAC-SHA256.
///
/// Unlike the one-time scheme's key material, a `MacKey` may authenticate
/// any number of messages. The buffer is zeroized on drop.
pub struct MacKey {
    bytes: Vec<u8>,
}

impl MacKey {
    /// Generate `length` random bytes from the OS entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::InvalidLength`] if `length` is zero.
    pub fn generate(length: usize) -> Result<Self, MacError> {
        if length == 0 {
            return Err(MacError::InvalidLength);
        }

        let mut bytes = vec![0u8; length];
        OsRng.fill_bytes(&mut bytes);
        Ok(Self { bytes })
    }

    /// Wrap caller-provided bytes as a key. Intended for tests and for
    /// keys delivered out of band.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Key length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the key holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl core::fmt::Debug for MacKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MacKey").field("len", &self.bytes.len()).finish()
    }
}

impl Drop for MacKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Compute the HMAC-SHA256 tag of `message` under `key`, as lowercase hex.
pub fn compute_tag(message: &[u8], key: &MacKey) -> String {
    let mut mac = new_mac(key);
    mac.update(message);
    hex::encode(mac.finalize().into_bytes())
}

/// Check `candidate` against the tag recomputed for `message`.
///
/// Runs in constant time over the digest bytes. Returns `false` for
/// candidates that are not 64 hex characters; malformed input is an
/// ordinary verification failure, not an error.
pub fn verify(message: &[u8], key: &MacKey, candidate: &str) -> bool {
    let Ok(candidate_bytes) = hex::decode(candidate) else {
        return false;
    };

    let mut mac = new_mac(key);
    mac.update(message);
    mac.verify_slice(&candidate_bytes).is_ok()
}

fn new_mac(key: &MacKey) -> HmacSha256 {
    let Ok(mac) = HmacSha256::new_from_slice(&key.bytes) else {
        unreachable!("HMAC-SHA256 accepts any key size");
    };
    mac
}
