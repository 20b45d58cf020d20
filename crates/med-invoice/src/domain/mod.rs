//! # Domain Layer
//!
//! Pure business logic. No I/O, no locks, no logging.
//!
//! ## Components
//!
//! - `registry.rs` - the gated append-only invoice store
//! - `errors.rs` - registry error taxonomy

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
