//! # Domain Layer - Token Ledger
//!
//! Pure ledger logic. No I/O, no locking, no logging; shared-access concerns
//! live in `adapters`.
//!
//! ## Components
//!
//! - `entities`: Genesis, TokenMetadata (fixed at construction)
//! - `ledger`: TokenLedger with conserving transfers
//! - `services`: decimal unit conversion helpers
//! - `errors`: LedgerError, AmountError
//!
//! ## Data Types
//!
//! - Account: `med_types::Address` (20-byte account address)
//! - Amounts: `U256` base units, 10^decimals per whole token

pub mod entities;
pub mod errors;
pub mod ledger;
pub mod services;

pub use entities::*;
pub use errors::*;
pub use ledger::*;
pub use services::*;
