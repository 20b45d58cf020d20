//! # Application Layer
//!
//! Orchestrates the domain behind the inbound port and owns all logging.

pub mod service;

pub use service::*;
