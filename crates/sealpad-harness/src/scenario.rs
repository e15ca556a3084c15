//! Behavioral parity scenarios.
//!
//! Each scenario runs both schemes over the same message and reports what
//! each one observed. The first two establish parity (both accept genuine
//! traffic, both reject a single-bit flip); the third demonstrates the one
//! divergence — the linear fold tag accepts a paired flip past its
//! 16-byte key segment, while HMAC-SHA256 rejects the same modification.

use sealpad_crypto::{OneTimeKey, TAG_SEGMENT_LEN, decode_and_verify, encode_and_tag};
use sealpad_mac::{DEFAULT_KEY_LEN, MacKey, compute_tag, verify};
use tracing::debug;

use crate::error::HarnessError;

/// What each scheme reported for an untampered round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTripOutcome {
    /// One-time channel returned the original bytes
    pub one_time_message_intact: bool,
    /// One-time channel verified the tag
    pub one_time_authentic: bool,
    /// MAC baseline verified its own tag
    pub mac_verified: bool,
}

impl RoundTripOutcome {
    /// Whether both schemes accepted the genuine message.
    pub fn is_parity(&self) -> bool {
        self.one_time_message_intact && self.one_time_authentic && self.mac_verified
    }
}

/// What each scheme reported after a single-byte corruption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TamperOutcome {
    /// One-time channel refused the tampered envelope
    pub one_time_rejected: bool,
    /// MAC baseline refused the tampered message
    pub mac_rejected: bool,
}

/// What each scheme reported for the paired-flip forgery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeryOutcome {
    /// The forged envelope decoded to bytes other than the original
    pub one_time_message_altered: bool,
    /// The one-time channel nevertheless accepted the forged envelope
    pub one_time_accepted_forgery: bool,
    /// MAC baseline rejected the equivalent modification
    pub mac_rejected: bool,
}

/// Send `message` through both schemes untouched.
///
/// # Errors
///
/// Propagates precondition failures from either scheme.
pub fn check_round_trip(message: &[u8]) -> Result<RoundTripOutcome, HarnessError> {
    let key = OneTimeKey::generate(message.len() + TAG_SEGMENT_LEN)?;
    let envelope = encode_and_tag(message, &key)?;
    let verified = decode_and_verify(&envelope, &key, message.len())?;

    let mac_key = MacKey::generate(DEFAULT_KEY_LEN)?;
    let tag = compute_tag(message, &mac_key);

    let outcome = RoundTripOutcome {
        one_time_message_intact: verified.bytes() == message,
        one_time_authentic: verified.is_authentic(),
        mac_verified: verify(message, &mac_key, &tag),
    };
    debug!(?outcome, "round trip");
    Ok(outcome)
}

/// Corrupt one byte and check that both schemes notice.
///
/// The one-time side flips every bit of the first ciphertext byte before
/// decoding; the MAC side verifies the original tag against a message whose
/// first byte got the same treatment.
///
/// # Errors
///
/// Returns [`HarnessError::MessageTooShort`] for an empty message, and
/// propagates scheme precondition failures.
pub fn check_single_flip_tamper(message: &[u8]) -> Result<TamperOutcome, HarnessError> {
    if message.is_empty() {
        return Err(HarnessError::MessageTooShort { required: 1, actual: 0 });
    }

    let key = OneTimeKey::generate(message.len() + TAG_SEGMENT_LEN)?;
    let mut envelope = encode_and_tag(message, &key)?;
    envelope.ciphertext[0] ^= 0xFF;
    let verified = decode_and_verify(&envelope, &key, message.len())?;

    let mac_key = MacKey::generate(DEFAULT_KEY_LEN)?;
    let tag = compute_tag(message, &mac_key);
    let mut tampered = message.to_vec();
    tampered[0] ^= 0xFF;

    let outcome = TamperOutcome {
        one_time_rejected: !verified.is_authentic(),
        mac_rejected: !verify(&tampered, &mac_key, &tag),
    };
    debug!(?outcome, "single flip tamper");
    Ok(outcome)
}

/// Apply the cancelling paired flip that the linear fold cannot see.
///
/// Flips the same bit in two ciphertext bytes past the tag segment. The
/// decoded message differs from the original in two bytes, yet the fold
/// accumulator is unchanged and the one-time tag still verifies. The MAC
/// baseline, given the same two-byte modification, rejects it.
///
/// # Errors
///
/// Returns [`HarnessError::MessageTooShort`] unless the message extends at
/// least two bytes past the tag segment, and propagates scheme
/// precondition failures.
pub fn check_linear_fold_forgery(message: &[u8]) -> Result<ForgeryOutcome, HarnessError> {
    let required = TAG_SEGMENT_LEN + 2;
    if message.len() < required {
        return Err(HarnessError::MessageTooShort { required, actual: message.len() });
    }

    let key = OneTimeKey::generate(message.len() + TAG_SEGMENT_LEN)?;
    let mut envelope = encode_and_tag(message, &key)?;
    envelope.ciphertext[TAG_SEGMENT_LEN] ^= 0x01;
    envelope.ciphertext[TAG_SEGMENT_LEN + 1] ^= 0x01;
    let verified = decode_and_verify(&envelope, &key, message.len())?;

    let mac_key = MacKey::generate(DEFAULT_KEY_LEN)?;
    let tag = compute_tag(message, &mac_key);
    let mut forged = message.to_vec();
    forged[TAG_SEGMENT_LEN] ^= 0x01;
    forged[TAG_SEGMENT_LEN + 1] ^= 0x01;

    let outcome = ForgeryOutcome {
        one_time_message_altered: verified.bytes() != message,
        one_time_accepted_forgery: verified.is_authentic(),
        mac_rejected: !verify(&forged, &mac_key, &tag),
    };
    debug!(?outcome, "linear fold forgery");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_reaches_parity() {
        let outcome = check_round_trip(b"routine traffic, nothing unusual").unwrap();
        assert!(outcome.is_parity());
    }

    #[test]
    fn round_trip_of_empty_message() {
        let outcome = check_round_trip(&[]).unwrap();
        assert!(outcome.is_parity());
    }

    #[test]
    fn single_flip_rejected_by_both() {
        let outcome = check_single_flip_tamper(b"wire 1000 credits to vault 9").unwrap();
        assert!(outcome.one_time_rejected);
        assert!(outcome.mac_rejected);
    }

    #[test]
    fn single_flip_needs_a_byte_to_flip() {
        let result = check_single_flip_tamper(&[]);
        assert_eq!(
            result.unwrap_err(),
            HarnessError::MessageTooShort { required: 1, actual: 0 }
        );
    }

    #[test]
    fn forgery_splits_the_schemes() {
        let outcome = check_linear_fold_forgery(b"pay 10 credits to account 7524").unwrap();
        assert!(outcome.one_time_message_altered);
        assert!(outcome.one_time_accepted_forgery);
        assert!(outcome.mac_rejected);
    }

    #[test]
    fn forgery_needs_bytes_past_the_tag_segment() {
        let result = check_linear_fold_forgery(&[0u8; TAG_SEGMENT_LEN]);
        assert_eq!(
            result.unwrap_err(),
            HarnessError::MessageTooShort { required: TAG_SEGMENT_LEN + 2, actual: TAG_SEGMENT_LEN }
        );
    }
}
