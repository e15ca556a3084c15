//! Fuzz target for decode_and_verify
//!
//! Feeds arbitrary ciphertext, tag, key bytes, and claimed lengths into the
//! decode path. Verification is total over adversarial input: every
//! combination must return either a verified message or a length error.
//!
//! The fuzzer should NEVER panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sealpad_crypto::{AuthenticatedEnvelope, OneTimeKey, decode_and_verify};

fuzz_target!(|input: (Vec<u8>, String, Vec<u8>, u16)| {
    let (ciphertext, tag, key_bytes, claimed_len) = input;

    let envelope = AuthenticatedEnvelope { ciphertext, tag };
    let key = OneTimeKey::from_bytes(key_bytes);

    // Must never panic, only return Ok or a length error
    let _ = decode_and_verify(&envelope, &key, claimed_len as usize);
});
