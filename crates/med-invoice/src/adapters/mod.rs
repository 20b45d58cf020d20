//! # Adapters Layer
//!
//! Concrete implementations of the outbound ports.

pub mod ledger_source;
