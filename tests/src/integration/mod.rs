//! # Integration Tests
//!
//! Cross-crate flows: a genesis-funded shared ledger driving the invoice
//! registry's write gate.

pub mod flows;
