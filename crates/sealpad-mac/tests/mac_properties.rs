//! Property-based tests for the MAC baseline
//!
//! The comparison oracle contract: a genuine tag always verifies, and a
//! tag computed for one message never verifies for a different one.

use proptest::prelude::*;
use sealpad_mac::{MacKey, compute_tag, verify};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_genuine_tag_verifies(
        message in prop::collection::vec(any::<u8>(), 0..512),
        key_bytes in prop::collection::vec(any::<u8>(), 1..64),
    ) {
        let key = MacKey::from_bytes(key_bytes);
        let tag = compute_tag(&message, &key);

        prop_assert!(verify(&message, &key, &tag));
    }

    #[test]
    fn prop_modified_message_fails(
        message in prop::collection::vec(any::<u8>(), 1..512),
        key_bytes in prop::collection::vec(any::<u8>(), 1..64),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let key = MacKey::from_bytes(key_bytes);
        let tag = compute_tag(&message, &key);

        let mut modified = message.clone();
        let index = position.index(modified.len());
        modified[index] ^= 1 << bit;

        prop_assert!(!verify(&modified, &key, &tag));
    }

    #[test]
    fn prop_tag_is_deterministic(
        message in prop::collection::vec(any::<u8>(), 0..256),
        key_bytes in prop::collection::vec(any::<u8>(), 1..64),
    ) {
        let key = MacKey::from_bytes(key_bytes);

        prop_assert_eq!(compute_tag(&message, &key), compute_tag(&message, &key));
    }
}
