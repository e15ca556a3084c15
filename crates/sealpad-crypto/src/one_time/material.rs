//! Single-use key material.
//!
//! A [`OneTimeKey`] is an opaque buffer of cryptographically random bytes.
//! The one-time contract (never reuse a key across two encode calls) is a
//! documented caller precondition; the module enforces key length only.
//! Buffers zeroize their contents on drop so discarded keys do not linger
//! in memory.

use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::Zeroize;

use super::error::OneTimeError;

/// Cryptographically random key material for exactly one message.
///
/// # Security
///
/// - Bytes come from the operating system entropy source
/// - The buffer is zeroized when dropped
/// - Reuse across messages is NOT detected; callers must generate a fresh
///   key per message
pub struct OneTimeKey {
    bytes: Vec<u8>,
}

impl OneTimeKey {
    /// Generate `length` random bytes from the OS entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`OneTimeError::InvalidLength`] if `length` is zero.
    pub fn generate(length: usize) -> Result<Self, OneTimeError> {
        if length == 0 {
            return Err(OneTimeError::InvalidLength);
        }

        let mut bytes = vec![0u8; length];
        OsRng.fill_bytes(&mut bytes);
        Ok(Self { bytes })
    }

    /// Wrap caller-provided bytes as key material.
    ///
    /// Intended for deterministic tests and for keys delivered out of band.
    /// The caller is responsible for the randomness quality of the bytes.
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

impl core::fmt::Debug for OneTimeKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OneTimeKey").field("len", &self.bytes.len()).finish()
    }
}

impl Drop for OneTimeKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_requested_length() {
        let key = OneTimeKey::generate(47).unwrap();
        assert_eq!(key.len(), 47);
        assert!(!key.is_empty());
    }

    #[test]
    fn generate_rejects_zero_length() {
        let result = OneTimeKey::generate(0);
        assert_eq!(result.unwrap_err(), OneTimeError::InvalidLength);
    }

    #[test]
    fn generate_single_byte() {
        let key = OneTimeKey::generate(1).unwrap();
        assert_eq!(key.len(), 1);
    }

    #[test]
    fn two_keys_differ() {
        // 32 random bytes colliding is beyond astronomically unlikely
        let a = OneTimeKey::generate(32).unwrap();
        let b = OneTimeKey::generate(32).unwrap();
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn from_bytes_preserves_content() {
        let key = OneTimeKey::from_bytes(vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(key.as_bytes(), &[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(key.len(), 4);
    }

    #[test]
    fn from_bytes_accepts_empty() {
        let key = OneTimeKey::from_bytes(Vec::new());
        assert!(key.is_empty());
    }
}
