//! # PPT Token Ledger
//!
//! Fixed-supply fungible token ledger. The entire supply is credited to a
//! single holder at construction and thereafter moves only through
//! [`TokenLedger::transfer`].
//!
//! ## Purpose
//!
//! Owns the account → balance mapping and the total-supply invariant that the
//! invoice registry's write gate depends on. Balance reads are total (unknown
//! accounts are zero) and never allocate; mutations are all-or-nothing per
//! call.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Conservation: sum of balances == total supply | `domain/ledger.rs` - `transfer()` writes both sides or neither |
//! | No negative balances | `domain/ledger.rs` - debit guarded before any write |
//! | No silent wrap-around | `domain/ledger.rs` - credit side uses checked arithmetic |
//! | Supply fixed at construction | `domain/ledger.rs` - no mint/burn surface exists |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  adapters/shared.rs - SharedLedger (Arc<RwLock> handle)         │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ wraps ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/entities.rs - Genesis, TokenMetadata                    │
//! │  domain/ledger.rs   - TokenLedger state machine                 │
//! │  domain/services.rs - decimal unit conversion                   │
//! │  domain/errors.rs   - LedgerError, AmountError                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod domain;

pub use adapters::*;
pub use domain::*;
