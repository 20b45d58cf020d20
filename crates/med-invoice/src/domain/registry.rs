//! # Invoice Registry
//!
//! The append-only, balance-gated file store. Each account owns an ordered
//! list of opaque payloads; the only mutation appends to the caller's own
//! list, and only while the caller holds tokens on the ledger.
//!
//! The gate is evaluated against the ledger's *current* state on every call.
//! History already stored is never re-checked: an account that later drains
//! its balance keeps (and can read) everything it stored while funded.

use std::collections::HashMap;

use med_types::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

use crate::domain::errors::RegistryError;
use crate::ports::outbound::BalanceSource;

/// Point-in-time registry occupancy counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    /// Accounts with at least one stored payload.
    pub accounts: usize,
    /// Total payloads across all accounts.
    pub total_files: usize,
}

/// Per-account append-only store, gated on token ownership.
///
/// # INVARIANTS
///
/// 1. `save_file` mutates nothing when it returns an error.
/// 2. Payloads for an account are kept in acceptance order.
/// 3. Reads never create entries: asking for an unknown account's
///    files returns an empty slice and leaves the map untouched.
/// 4. The ledger behind `B` is only ever read, never written.
#[derive(Debug)]
pub struct InvoiceRegistry<B: BalanceSource> {
    /// Read-only view onto token balances, fixed at construction.
    ledger: B,
    /// Account → stored payloads, in acceptance order.
    records: HashMap<Address, Vec<Bytes>>,
}

impl<B: BalanceSource> InvoiceRegistry<B> {
    /// Creates an empty registry gated on `ledger`.
    #[must_use]
    pub fn new(ledger: B) -> Self {
        Self {
            ledger,
            records: HashMap::new(),
        }
    }

    /// Appends `payload` to the caller's file list.
    ///
    /// The caller must hold a positive token balance at call time; otherwise
    /// the append is refused and the registry is left unchanged.
    pub fn save_file(&mut self, caller: &Address, payload: Bytes) -> Result<(), RegistryError> {
        // Gate first: the balance check precedes every write.
        if !self.ledger.has_tokens(caller) {
            return Err(RegistryError::Unauthorized { account: *caller });
        }
        self.records.entry(*caller).or_default().push(payload);
        Ok(())
    }

    /// Returns the caller's stored payloads in acceptance order.
    ///
    /// Ungated: works for any account, funded or not, and returns an empty
    /// slice for accounts that never stored anything.
    #[must_use]
    pub fn get_files(&self, caller: &Address) -> &[Bytes] {
        self.records.get(caller).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Convenience read of the caller's token balance, straight off the
    /// ledger port.
    #[must_use]
    pub fn get_user_tokens(&self, caller: &Address) -> U256 {
        self.ledger.balance_of(caller)
    }

    /// Occupancy counters for diagnostics.
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            accounts: self.records.len(),
            total_files: self.records.values().map(Vec::len).sum(),
        }
    }
}

// ============================================================
// Tests
// ============================================================
