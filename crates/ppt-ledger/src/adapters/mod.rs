//! # Adapters - Token Ledger
//!
//! Outer-layer wrappers around the pure domain.

pub mod shared;

pub use shared::*;
