//! Timing sweep over matching message sizes.
//!
//! For each configured size the sweep times the authenticated send
//! operation of both schemes: `compute_tag` for the MAC baseline and
//! `encode_and_tag` for the one-time channel. Key generation happens
//! outside the timed region on both sides — the comparison is about the
//! per-message work, not entropy throughput. One-time keys are regenerated
//! every iteration to honor the single-use contract.

use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sealpad_crypto::{OneTimeKey, TAG_SEGMENT_LEN, encode_and_tag};
use sealpad_mac::{DEFAULT_KEY_LEN, MacKey, compute_tag};
use tracing::debug;

use crate::error::HarnessError;

/// Message sizes a sweep measures by default, in bytes.
pub const DEFAULT_MESSAGE_SIZES: [usize; 6] = [10, 50, 100, 500, 1000, 5000];

/// Configuration for a timing sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Message sizes to measure, in bytes
    pub sizes: Vec<usize>,
    /// Timed iterations per size; timings are averaged over these
    pub iterations: u32,
    /// Seed for the message-content RNG
    pub seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self { sizes: DEFAULT_MESSAGE_SIZES.to_vec(), iterations: 32, seed: 0x5EA1_FAD5 }
    }
}

/// Averaged timings for one message size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeTiming {
    /// Message length in bytes
    pub message_len: usize,
    /// Mean duration of one MAC `compute_tag` call
    pub mac_compute: Duration,
    /// Mean duration of one `encode_and_tag` call
    pub one_time_encode: Duration,
}

/// Results of a full sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    /// One entry per configured size, in configuration order
    pub timings: Vec<SizeTiming>,
}

impl SweepReport {
    /// Mean MAC timing across all sizes.
    pub fn mean_mac(&self) -> Duration {
        mean(self.timings.iter().map(|t| t.mac_compute))
    }

    /// Mean one-time timing across all sizes.
    pub fn mean_one_time(&self) -> Duration {
        mean(self.timings.iter().map(|t| t.one_time_encode))
    }
}

fn mean(durations: impl ExactSizeIterator<Item = Duration>) -> Duration {
    let count = durations.len() as u32;
    if count == 0 {
        return Duration::ZERO;
    }
    durations.sum::<Duration>() / count
}

/// Run the sweep described by `config`.
///
/// # Errors
///
/// Propagates precondition failures from either scheme; with well-formed
/// sizes and iterations these do not occur.
pub fn run_timing_sweep(config: &SweepConfig) -> Result<SweepReport, HarnessError> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let iterations = config.iterations.max(1);

    let mut timings = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let mut message = vec![0u8; size];
        rng.fill(message.as_mut_slice());

        let mac_key = MacKey::generate(DEFAULT_KEY_LEN)?;
        let mut mac_elapsed = Duration::ZERO;
        for _ in 0..iterations {
            let start = Instant::now();
            let tag = compute_tag(&message, &mac_key);
            mac_elapsed += start.elapsed();
            debug_assert_eq!(tag.len(), 64);
        }

        let mut one_time_elapsed = Duration::ZERO;
        for _ in 0..iterations {
            // Fresh key every iteration; reuse would void the scheme
            let key = OneTimeKey::generate(size + TAG_SEGMENT_LEN)?;
            let start = Instant::now();
            let envelope = encode_and_tag(&message, &key)?;
            one_time_elapsed += start.elapsed();
            debug_assert_eq!(envelope.ciphertext.len(), size);
        }

        let timing = SizeTiming {
            message_len: size,
            mac_compute: mac_elapsed / iterations,
            one_time_encode: one_time_elapsed / iterations,
        };
        debug!(
            size,
            mac_ns = timing.mac_compute.as_nanos() as u64,
            one_time_ns = timing.one_time_encode.as_nanos() as u64,
            "sweep point"
        );
        timings.push(timing);
    }

    Ok(SweepReport { timings })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_covers_every_configured_size() {
        let config =
            SweepConfig { sizes: vec![8, 64, 256], iterations: 4, seed: 7 };
        let report = run_timing_sweep(&config).unwrap();

        let lens: Vec<usize> = report.timings.iter().map(|t| t.message_len).collect();
        assert_eq!(lens, vec![8, 64, 256]);
    }

    #[test]
    fn sweep_with_default_config_covers_six_sizes() {
        let config = SweepConfig { iterations: 1, ..SweepConfig::default() };
        let report = run_timing_sweep(&config).unwrap();
        assert_eq!(report.timings.len(), DEFAULT_MESSAGE_SIZES.len());
    }

    #[test]
    fn zero_iterations_is_clamped() {
        let config = SweepConfig { sizes: vec![16], iterations: 0, seed: 1 };
        let report = run_timing_sweep(&config).unwrap();
        assert_eq!(report.timings.len(), 1);
    }

    #[test]
    fn empty_sweep_reports_zero_means() {
        let report = SweepReport { timings: Vec::new() };
        assert_eq!(report.mean_mac(), Duration::ZERO);
        assert_eq!(report.mean_one_time(), Duration::ZERO);
    }

    #[test]
    fn means_average_the_entries() {
        let report = SweepReport {
            timings: vec![
                SizeTiming {
                    message_len: 1,
                    mac_compute: Duration::from_nanos(100),
                    one_time_encode: Duration::from_nanos(300),
                },
                SizeTiming {
                    message_len: 2,
                    mac_compute: Duration::from_nanos(200),
                    one_time_encode: Duration::from_nanos(500),
                },
            ],
        };
        assert_eq!(report.mean_mac(), Duration::from_nanos(150));
        assert_eq!(report.mean_one_time(), Duration::from_nanos(400));
    }
}
