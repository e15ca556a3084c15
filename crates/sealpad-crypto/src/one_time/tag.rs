//! Keyed fold tag engine.
//!
//! Derives a one-byte authentication tag by XOR-folding the message against
//! the tag segment of the key, rendered as two lowercase hex digits.
//!
//! # Security
//!
//! This construction is deliberately weak and must stay as it is:
//!
//! - The fold is linear. Any pair of identical bit flips cancels in the
//!   accumulator, so targeted two-byte forgeries verify as authentic.
//! - Message bytes at indexes past the tag segment are folded raw, with no
//!   key mixing at all.
//! - [`verify_tag`] uses a plain equality check, not a constant-time
//!   comparison.
//!
//! The scheme under study is defined by these properties; replacing the
//! fold with a real MAC would change the system being measured.

/// Length of the key segment reserved for tag derivation.
pub const TAG_SEGMENT_LEN: usize = 16;

/// Derive the tag for `message` under `tag_key`.
///
/// The accumulator starts at zero. Each message byte at index `i` is folded
/// as `message[i] ^ tag_key[i]` while the tag key lasts, and as the raw
/// message byte once the key is exhausted. The final byte is rendered as a
/// two-character lowercase hex string.
pub fn generate_tag(message: &[u8], tag_key: &[u8]) -> String {
    let mut accumulator = 0u8;
    for (i, &byte) in message.iter().enumerate() {
        match tag_key.get(i) {
            Some(&key_byte) => accumulator ^= byte ^ key_byte,
            None => accumulator ^= byte,
        }
    }

    format!("{accumulator:02x}")
}

/// Check `candidate` against the tag recomputed for `message`.
///
/// The comparison is an ordinary string equality, not constant-time.
pub fn verify_tag(message: &[u8], tag_key: &[u8], candidate: &str) -> bool {
    generate_tag(message, tag_key) == candidate
}
