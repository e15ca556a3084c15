//! Console demonstrations.
//!
//! Each function drives real scheme operations and prints what happened;
//! nothing here is mocked. Key material is shown in hex because these are
//! demonstrations — production callers must never log keys.

#![allow(clippy::print_stdout)]

use sealpad_crypto::{OneTimeKey, TAG_SEGMENT_LEN, decode_and_verify, encode_and_tag};
use sealpad_harness::{
    HarnessError, SweepConfig, check_linear_fold_forgery, check_round_trip,
    check_single_flip_tamper, run_timing_sweep,
};
use sealpad_mac::{DEFAULT_KEY_LEN, MacKey, compute_tag, verify};
use tracing::info;

/// Walk the one-time channel through an exchange, then tamper with it.
///
/// # Errors
///
/// Propagates key-generation and channel precondition failures.
pub fn run_one_time_demo() -> Result<(), HarnessError> {
    let message = "Meet me at the library at 3 PM";
    info!(len = message.len(), "one-time demo start");

    println!("== One-time authenticated channel ==");
    println!("message:    {message}");

    let key = OneTimeKey::generate(message.len() + TAG_SEGMENT_LEN)?;
    println!("key:        {} ({} bytes)", hex::encode(key.as_bytes()), key.len());

    let envelope = encode_and_tag(message.as_bytes(), &key)?;
    println!("ciphertext: {}", hex::encode(&envelope.ciphertext));
    println!("tag:        {}", envelope.tag);

    let verified = decode_and_verify(&envelope, &key, message.len())?;
    println!(
        "decoded:    {} (authentic: {})",
        verified.text().unwrap_or("<invalid utf-8>"),
        verified.is_authentic()
    );

    let mut tampered = envelope.clone();
    tampered.ciphertext[0] ^= 0xFF;
    let tampered_result = decode_and_verify(&tampered, &key, message.len())?;
    println!("tampered first byte -> authentic: {}", tampered_result.is_authentic());
    println!();

    Ok(())
}

/// Walk the MAC baseline through the same exchange shape.
///
/// # Errors
///
/// Propagates key-generation failures.
pub fn run_mac_demo() -> Result<(), HarnessError> {
    let message = "Meet me at the library at 3 PM";
    info!(len = message.len(), "mac demo start");

    println!("== Keyed-hash MAC baseline ==");
    println!("message: {message}");

    let key = MacKey::generate(DEFAULT_KEY_LEN)?;
    println!("key:     {} ({} bytes, reusable)", hex::encode(key.as_bytes()), key.len());

    let tag = compute_tag(message.as_bytes(), &key);
    println!("tag:     {tag}");
    println!("verify original: {}", verify(message.as_bytes(), &key, &tag));

    let tampered = "Meet me at the library at 9 PM";
    println!("verify tampered: {}", verify(tampered.as_bytes(), &key, &tag));
    println!();

    Ok(())
}

/// Run the timing sweep and the behavioral scenarios, then render both.
///
/// # Errors
///
/// Propagates harness failures.
pub fn run_comparison(iterations: u32) -> Result<(), HarnessError> {
    info!(iterations, "comparison start");

    println!("== Timing sweep (mean of {iterations} iterations) ==");
    let config = SweepConfig { iterations, ..SweepConfig::default() };
    let report = run_timing_sweep(&config)?;

    println!("{:>8}  {:>12}  {:>12}", "bytes", "mac", "one-time");
    for timing in &report.timings {
        println!(
            "{:>8}  {:>10}us  {:>10}us",
            timing.message_len,
            timing.mac_compute.as_micros(),
            timing.one_time_encode.as_micros()
        );
    }
    println!(
        "means: mac {}us, one-time {}us",
        report.mean_mac().as_micros(),
        report.mean_one_time().as_micros()
    );
    println!();

    println!("== Behavioral comparison ==");
    let message = b"pay 10 credits to account 7524";

    let round_trip = check_round_trip(message)?;
    println!("genuine message accepted by both: {}", round_trip.is_parity());

    let tamper = check_single_flip_tamper(message)?;
    println!(
        "single flip rejected: one-time {}, mac {}",
        tamper.one_time_rejected, tamper.mac_rejected
    );

    let forgery = check_linear_fold_forgery(message)?;
    println!(
        "paired flip past tag segment: one-time accepted forgery {}, mac rejected {}",
        forgery.one_time_accepted_forgery, forgery.mac_rejected
    );
    println!();

    Ok(())
}
