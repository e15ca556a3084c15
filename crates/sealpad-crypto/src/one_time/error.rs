//! Error types for the one-time channel.
//!
//! Both variants are precondition violations surfaced immediately to the
//! caller. There is no recovery path and no retry: callers must supply
//! correctly sized key material. Authentication failure is never an error;
//! it is reported as data in [`super::VerifiedMessage`].

use thiserror::Error;

/// Errors that can occur during one-time channel operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OneTimeError {
    /// Requested key length was zero
    #[error("invalid key length: must be at least 1 byte")]
    InvalidLength,

    /// Key buffer too short for the message plus the tag segment
    #[error("insufficient key material: need {required} bytes, have {actual}")]
    InsufficientKey {
        /// Minimum key length for this operation
        required: usize,
        /// Length of the key that was supplied
        actual: usize,
    },
}
