//! Error types for the comparison harness.

use thiserror::Error;

/// Errors that can occur while driving a comparison.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// One-time channel precondition failure
    #[error("one-time channel error: {0}")]
    OneTime(#[from] sealpad_crypto::OneTimeError),

    /// MAC baseline precondition failure
    #[error("mac baseline error: {0}")]
    Mac(#[from] sealpad_mac::MacError),

    /// Scenario needs a longer message than it was given
    #[error("message too short for scenario: need {required} bytes, have {actual}")]
    MessageTooShort {
        /// Minimum message length for the scenario
        required: usize,
        /// Length of the message that was supplied
        actual: usize,
    },
}
