//! # Ledger Balance Source
//!
//! Wires the registry's read-only balance port to the shared PPT ledger
//! handle. Only `balance_of` crosses the boundary; the registry can never
//! reach the ledger's transfer surface through this port.

use med_types::{Address, U256};
use ppt_ledger::SharedLedger;

use crate::ports::outbound::BalanceSource;

impl BalanceSource for SharedLedger {
    fn balance_of(&self, account: &Address) -> U256 {
        SharedLedger::balance_of(self, account)
    }
}

// ============================================================
// Tests
// ============================================================
