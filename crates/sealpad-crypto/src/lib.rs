//! Sealpad One-Time Authentication Primitives
//!
//! Building blocks for the one-time authenticated channel: single-use key
//! material, XOR stream encoding, and a keyed fold tag. All operations are
//! pure functions of their explicit inputs with no state between calls.
//!
//! # Key Lifecycle
//!
//! Each message consumes one fresh [`OneTimeKey`]. The key is partitioned
//! into two disjoint segments: an encoding segment as long as the message
//! and a 16-byte tag segment immediately after it.
//!
//! ```text
//! OneTimeKey (message_len + 16 bytes minimum)
//!        │
//!        ├── bytes [0 .. message_len]        → XOR encoding segment
//!        └── bytes [message_len .. +16]      → tag segment
//!               │
//!               ▼
//! encode_and_tag → AuthenticatedEnvelope (ciphertext, tag)
//! ```
//!
//! Keys are used for exactly one `encode_and_tag` call and discarded
//! afterward. Key buffers zeroize their contents on drop.
//!
//! # Security
//!
//! Perfect Secrecy:
//! - The encoding segment is uniformly random and as long as the message
//! - Ciphertext reveals nothing about the plaintext while the key is secret
//! - Both properties hold only if the key is never reused
//!
//! One-Time Contract:
//! - Reusing a key across two messages breaks both secrecy and
//!   authentication; this is a caller precondition, not a runtime check
//! - The module enforces key *length* only
//!
//! Tag Construction:
//! - The tag is a linear XOR fold of the message against the tag segment,
//!   rendered as two lowercase hex digits
//! - It is NOT collision-resistant: message bytes past the 16-byte tag
//!   segment are folded without key mixing, and paired bit flips cancel
//! - Tag comparison is a plain equality check, not constant-time
//! - Both properties are preserved intentionally; do not substitute a
//!   cryptographic MAC here

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod one_time;

pub use one_time::{
    AuthenticatedEnvelope, OneTimeError, OneTimeKey, TAG_SEGMENT_LEN, VerifiedMessage,
    decode_and_verify, encode_and_tag,
};
