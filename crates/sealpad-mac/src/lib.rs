//! Sealpad MAC Baseline
//!
//! Standard computational-security message authentication: HMAC-SHA256
//! with a reusable random key. The comparison harness consumes this crate
//! as a black box with three operations: generate a key, compute a tag,
//! verify a tag.
//!
//! # Security
//!
//! - Security is computational: forging a tag requires breaking HMAC-SHA256
//! - Keys may be reused across messages, unlike the one-time scheme
//! - Verification compares digests in constant time

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod keyed;

pub use error::MacError;
pub use keyed::{DEFAULT_KEY_LEN, MacKey, compute_tag, verify};
