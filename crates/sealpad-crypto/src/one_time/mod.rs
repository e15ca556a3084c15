//! One-time authenticated channel.
//!
//! Composes key material, the XOR codec, and the tag engine into two
//! operations: [`encode_and_tag`] and [`decode_and_verify`]. The channel
//! owns the key-partitioning policy and input validation; the submodules
//! stay agnostic of how the key was split.

mod channel;
mod codec;
mod error;
mod material;
mod tag;

pub use channel::{AuthenticatedEnvelope, VerifiedMessage, decode_and_verify, encode_and_tag};
pub use codec::{decode, encode};
pub use error::OneTimeError;
pub use material::OneTimeKey;
pub use tag::{TAG_SEGMENT_LEN, generate_tag, verify_tag};
