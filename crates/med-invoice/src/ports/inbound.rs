//! # Inbound (Driving) Ports
//!
//! The surface callers drive the registry through: one trait carrying the
//! registry's entire caller-facing operation set.

use med_types::{Address, Bytes, U256};

use crate::domain::errors::RegistryError;

/// Caller-facing registry operations.
pub trait InvoiceApi: Send + Sync {
    /// Appends `payload` to the caller's file list.
    ///
    /// Gated: the caller must hold a positive token balance at call time.
    /// On rejection nothing is stored.
    fn save_file(&mut self, caller: &Address, payload: Bytes) -> Result<(), RegistryError>;

    /// Returns the caller's stored payloads in acceptance order.
    ///
    /// Ungated: an account that has since drained its balance still reads
    /// everything it stored while funded; unknown accounts read empty.
    fn get_files(&self, caller: &Address) -> Vec<Bytes>;

    /// Convenience read of the caller's current token balance.
    fn get_user_tokens(&self, caller: &Address) -> U256;
}
