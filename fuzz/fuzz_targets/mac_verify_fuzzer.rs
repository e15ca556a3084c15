//! Fuzz target for MAC verification
//!
//! Candidate tags are attacker-controlled strings; verification must treat
//! malformed hex as an ordinary failure and never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sealpad_mac::{MacKey, compute_tag, verify};

fuzz_target!(|input: (Vec<u8>, Vec<u8>, String)| {
    let (message, key_bytes, candidate) = input;
    let key = MacKey::from_bytes(key_bytes);

    let tag = compute_tag(&message, &key);
    assert!(verify(&message, &key, &tag));

    let _ = verify(&message, &key, &candidate);
});
