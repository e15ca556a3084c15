//! Property-based parity tests across the two schemes
//!
//! Both schemes must accept genuine messages of any size and reject
//! single-byte corruption; the paired-flip forgery must split them for
//! every message long enough to reach past the tag segment.

use proptest::prelude::*;
use sealpad_harness::{
    SweepConfig, check_linear_fold_forgery, check_round_trip, check_single_flip_tamper,
    run_timing_sweep,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_round_trip_parity(message in prop::collection::vec(any::<u8>(), 0..256)) {
        let outcome = check_round_trip(&message).unwrap();
        prop_assert!(outcome.is_parity());
    }

    #[test]
    fn prop_single_flip_rejected_by_both(
        message in prop::collection::vec(any::<u8>(), 1..256),
    ) {
        let outcome = check_single_flip_tamper(&message).unwrap();
        prop_assert!(outcome.one_time_rejected);
        prop_assert!(outcome.mac_rejected);
    }

    #[test]
    fn prop_forgery_always_splits_the_schemes(
        message in prop::collection::vec(any::<u8>(), 18..256),
    ) {
        let outcome = check_linear_fold_forgery(&message).unwrap();
        prop_assert!(outcome.one_time_message_altered);
        prop_assert!(outcome.one_time_accepted_forgery);
        prop_assert!(outcome.mac_rejected);
    }
}

#[test]
fn sweep_is_reproducible_in_shape() {
    let config = SweepConfig { sizes: vec![10, 50], iterations: 2, seed: 42 };

    let first = run_timing_sweep(&config).unwrap();
    let second = run_timing_sweep(&config).unwrap();

    let lens = |report: &sealpad_harness::SweepReport| {
        report.timings.iter().map(|t| t.message_len).collect::<Vec<_>>()
    };
    assert_eq!(lens(&first), lens(&second));
}
