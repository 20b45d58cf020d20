//! # Error Types
//!
//! Parse errors for the shared value types.

use thiserror::Error;

/// Errors from parsing an [`Address`](crate::entities::Address) out of text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Input was not valid hexadecimal.
    #[error("invalid hex in address: {0}")]
    InvalidHex(String),

    /// Decoded byte length was not 20.
    #[error("invalid address length: expected 20 bytes, got {0}")]
    InvalidLength(usize),
}
