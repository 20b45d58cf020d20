//! # Outbound (Driven) Ports
//!
//! Dependencies the registry needs from the outside. There is exactly one:
//! a read-only view onto token balances. None of these methods can mutate
//! the ledger, which is how the registry's no-write guarantee is enforced
//! at the type level.

use med_types::{Address, U256};

/// Read-only balance oracle for the write gate.
pub trait BalanceSource: Send + Sync {
    /// Current balance of `account`; zero for accounts never funded.
    fn balance_of(&self, account: &Address) -> U256;

    /// Whether `account` holds any tokens at all.
    fn has_tokens(&self, account: &Address) -> bool {
        !self.balance_of(account).is_zero()
    }
}

// ============================================================
// Mock implementations for testing
// ============================================================

/// In-memory balance table with interior mutability, so tests can flip an
/// account's funding between calls and observe the gate react.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockBalanceSource {
    balances: std::sync::Arc<std::sync::RwLock<std::collections::HashMap<Address, U256>>>,
}

#[cfg(test)]
impl MockBalanceSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(self, address: Address, balance: U256) -> Self {
        self.set_balance(address, balance);
        self
    }

    pub fn set_balance(&self, address: Address, balance: U256) {
        self.balances.write().unwrap().insert(address, balance);
    }
}

#[cfg(test)]
impl BalanceSource for MockBalanceSource {
    fn balance_of(&self, account: &Address) -> U256 {
        self.balances
            .read()
            .unwrap()
            .get(account)
            .copied()
            .unwrap_or_default()
    }
}

// ============================================================
// Tests
// ============================================================
