//! XOR stream codec.
//!
//! Byte-wise XOR of a message against the prefix of a key slice. XOR is
//! self-inverse, so [`decode`] is the same operation as [`encode`]; the two
//! names exist to keep call sites readable. Round-trip law:
//! `decode(encode(m, k), k) == m` whenever `k` is at least as long as `m`.

use super::error::OneTimeError;

/// Encode a message by XORing it with the first `message.len()` bytes of
/// `key`.
///
/// Output length equals input length. With a uniformly random single-use
/// key this is a one-time pad and the ciphertext carries no information
/// about the plaintext.
///
/// # Errors
///
/// Returns [`OneTimeError::InsufficientKey`] if `key` is shorter than
/// `message`.
pub fn encode(message: &[u8], key: &[u8]) -> Result<Vec<u8>, OneTimeError> {
    xor_with_prefix(message, key)
}

/// Decode a ciphertext by XORing it with the first `ciphertext.len()` bytes
/// of `key`.
///
/// # Errors
///
/// Returns [`OneTimeError::InsufficientKey`] if `key` is shorter than
/// `ciphertext`.
pub fn decode(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>, OneTimeError> {
    xor_with_prefix(ciphertext, key)
}

/// XOR `data` against the prefix of `key`, requiring `key.len() >= data.len()`.
#[inline]
fn xor_with_prefix(data: &[u8], key: &[u8]) -> Result<Vec<u8>, OneTimeError> {
    if key.len() < data.len() {
        return Err(OneTimeError::InsufficientKey { required: data.len(), actual: key.len() });
    }

    Ok(data.iter().zip(key.iter()).map(|(d, k)| d ^ k).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_known_bytes() {
        // 'A' (0x41) XOR 0xFF = 0xBE
        let ciphertext = encode(&[0x41], &[0xFF]).unwrap();
        assert_eq!(ciphertext, vec![0xBE]);
    }

    #[test]
    fn encode_preserves_length() {
        let message = b"attack at dawn";
        let key = vec![0x5A; 32];
        let ciphertext = encode(message, &key).unwrap();
        assert_eq!(ciphertext.len(), message.len());
    }

    #[test]
    fn encode_uses_key_prefix_only() {
        let message = [0x00, 0x00];
        let key = [0x11, 0x22, 0x33, 0x44];
        let ciphertext = encode(&message, &key).unwrap();
        assert_eq!(ciphertext, vec![0x11, 0x22]);
    }

    #[test]
    fn encode_decode_roundtrip() {
        let message = b"Hello, World!".to_vec();
        let key: Vec<u8> = (0..64).map(|i| (i * 7 + 3) as u8).collect();

        let ciphertext = encode(&message, &key).unwrap();
        let decoded = decode(&ciphertext, &key).unwrap();

        assert_eq!(decoded, message);
    }

    #[test]
    fn encode_empty_message() {
        let ciphertext = encode(&[], &[]).unwrap();
        assert!(ciphertext.is_empty());
    }

    #[test]
    fn encode_rejects_short_key() {
        let result = encode(b"four", &[0x00; 3]);
        assert_eq!(result.unwrap_err(), OneTimeError::InsufficientKey { required: 4, actual: 3 });
    }

    #[test]
    fn decode_rejects_short_key() {
        let result = decode(&[0xAA; 10], &[0x00; 9]);
        assert_eq!(result.unwrap_err(), OneTimeError::InsufficientKey { required: 10, actual: 9 });
    }

    #[test]
    fn encode_with_zero_key_is_identity() {
        let message = b"plaintext survives zero key";
        let key = vec![0x00; message.len()];
        let ciphertext = encode(message, &key).unwrap();
        assert_eq!(ciphertext, message);
    }

    #[test]
    fn encode_with_self_is_zero() {
        let data = [0x12, 0x34, 0x56, 0x78];
        let ciphertext = encode(&data, &data).unwrap();
        assert!(ciphertext.iter().all(|&b| b == 0));
    }
}
