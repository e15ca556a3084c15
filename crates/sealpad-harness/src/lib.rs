//! Comparison harness for the two authentication strategies.
//!
//! Drives the one-time channel and the MAC baseline side by side:
//!
//! - `comparison` sweeps matching message sizes and measures per-operation
//!   timing for both schemes.
//! - `scenario` checks behavioral parity: round-trip acceptance, rejection
//!   of single-bit tampering, and the one scenario where the schemes
//!   diverge — the linear fold's forgeable paired flip.
//!
//! The harness returns plain result structs and never prints; rendering is
//! the demo binary's job. Message content is drawn from a seeded RNG so
//! runs are reproducible; key material always comes from the OS entropy
//! source because the one-time contract demands a fresh key per call.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod comparison;
pub mod scenario;

mod error;

pub use comparison::{DEFAULT_MESSAGE_SIZES, SizeTiming, SweepConfig, SweepReport, run_timing_sweep};
pub use error::HarnessError;
pub use scenario::{
    ForgeryOutcome, RoundTripOutcome, TamperOutcome, check_linear_fold_forgery, check_round_trip,
    check_single_flip_tamper,
};
