//! # Shared Value Types
//!
//! Account addresses, opaque payload bytes, and the 256-bit balance type
//! shared by the ledger and registry crates.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every crate in the workspace names accounts,
//!   payloads, and amounts through the types defined here.
//! - **Value semantics**: all types are defined by their contents, not their
//!   identity, and are cheap to clone.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
