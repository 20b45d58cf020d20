//! # Error Types
//!
//! Failure modes of ledger mutations and of decimal amount parsing.

use med_types::{Address, U256};
use thiserror::Error;

/// Errors returned by ledger mutations.
///
/// Every failure leaves the ledger exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Sender does not hold enough tokens for the requested transfer.
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: U256, available: U256 },

    /// Crediting the recipient would exceed the 256-bit range.
    ///
    /// Unreachable while conservation holds (no balance can exceed the fixed
    /// total supply), but the arithmetic is checked rather than trusted.
    #[error("balance overflow crediting {account}: {balance} + {amount}")]
    Overflow {
        account: Address,
        balance: U256,
        amount: U256,
    },
}

/// Errors from parsing decimal token amounts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// Input was empty or contained non-digit characters.
    #[error("invalid decimal amount: {0:?}")]
    InvalidDecimal(String),

    /// More fractional digits than the token's decimals allow.
    #[error("too many fractional digits: {digits} > {decimals}")]
    TooPrecise { digits: usize, decimals: u8 },

    /// Scaled value does not fit in 256 bits.
    #[error("amount does not fit in 256 bits")]
    TooLarge,
}
