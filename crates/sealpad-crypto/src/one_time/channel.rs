//! Authenticated one-time channel.
//!
//! Owns the key-partitioning policy: the first `message_len` bytes of the
//! key encode the message, the next [`TAG_SEGMENT_LEN`] bytes derive the
//! tag. Both operations validate key length up front and hold no state
//! between calls.
//!
//! Verification never fails on attacker-controlled input: once the key
//! length checks pass, [`decode_and_verify`] is total over arbitrary
//! ciphertext bytes and reports authenticity as data, not as an error.

use super::codec;
use super::error::OneTimeError;
use super::material::OneTimeKey;
use super::tag::{self, TAG_SEGMENT_LEN};

/// The pair that crosses the channel boundary: ciphertext plus tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedEnvelope {
    /// XOR-encoded message, same length as the plaintext
    pub ciphertext: Vec<u8>,
    /// Two-character lowercase hex tag over the plaintext
    pub tag: String,
}

/// Result of decoding and verifying an envelope.
///
/// Separates the three outcomes a receiver cares about: the decoded bytes,
/// whether the tag matched, and whether the bytes form valid text. Only
/// structural problems (bad key lengths) surface as errors; a failed tag
/// is data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedMessage {
    bytes: Vec<u8>,
    authentic: bool,
}

impl VerifiedMessage {
    /// Decoded message bytes, whether or not the tag matched.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether the envelope's tag matched the decoded bytes.
    pub fn is_authentic(&self) -> bool {
        self.authentic
    }

    /// Decoded bytes as text, if they are valid UTF-8.
    ///
    /// Callers that require text must treat `None` as an authentication
    /// failure rather than an error: garbled bytes from a tampered or
    /// wrongly-keyed envelope are an expected adversarial input.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    /// Consume the result, yielding the decoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Encode `message` and derive its tag from a single one-time key.
///
/// The key is split into an encoding segment (first `message.len()` bytes)
/// and a tag segment (the [`TAG_SEGMENT_LEN`] bytes after it). The tag is
/// computed over the plaintext, not the ciphertext.
///
/// The key must not be used again after this call; see [`OneTimeKey`].
///
/// # Errors
///
/// Returns [`OneTimeError::InsufficientKey`] if the key is shorter than
/// `message.len() + TAG_SEGMENT_LEN`.
pub fn encode_and_tag(
    message: &[u8],
    key: &OneTimeKey,
) -> Result<AuthenticatedEnvelope, OneTimeError> {
    let (encoding_segment, tag_segment) = partition_key(key, message.len())?;

    let ciphertext = codec::encode(message, encoding_segment)?;
    let tag = tag::generate_tag(message, tag_segment);

    Ok(AuthenticatedEnvelope { ciphertext, tag })
}

/// Decode an envelope and check its tag against the decoded bytes.
///
/// `original_length` is the sender-side message length; it selects the same
/// key partition the sender used. A ciphertext longer than
/// `original_length` cannot be decoded with the partition and is rejected
/// as a structural error.
///
/// # Errors
///
/// Returns [`OneTimeError::InsufficientKey`] if the key is shorter than
/// `original_length + TAG_SEGMENT_LEN`, or if the ciphertext exceeds the
/// encoding segment.
pub fn decode_and_verify(
    envelope: &AuthenticatedEnvelope,
    key: &OneTimeKey,
    original_length: usize,
) -> Result<VerifiedMessage, OneTimeError> {
    let (encoding_segment, tag_segment) = partition_key(key, original_length)?;

    let bytes = codec::decode(&envelope.ciphertext, encoding_segment)?;
    let authentic = tag::verify_tag(&bytes, tag_segment, &envelope.tag);

    Ok(VerifiedMessage { bytes, authentic })
}

/// Split the key into (encoding segment, tag segment) for a message of
/// `message_len` bytes.
fn partition_key(
    key: &OneTimeKey,
    message_len: usize,
) -> Result<(&[u8], &[u8]), OneTimeError> {
    // Saturate instead of overflowing: no real key satisfies a length
    // anywhere near usize::MAX
    let required = message_len.saturating_add(TAG_SEGMENT_LEN);
    if key.len() < required {
        return Err(OneTimeError::InsufficientKey { required, actual: key.len() });
    }

    let bytes = key.as_bytes();
    Ok((&bytes[..message_len], &bytes[message_len..required]))
}
