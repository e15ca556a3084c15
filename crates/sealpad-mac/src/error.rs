//! Error types for the MAC baseline.

use thiserror::Error;

/// Errors that can occur when working with MAC keys.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MacError {
    /// Requested key length was zero
    #[error("invalid key length: must be at least 1 byte")]
    InvalidLength,
}
