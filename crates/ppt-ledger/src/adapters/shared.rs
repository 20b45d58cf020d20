//! # Shared Ledger Handle
//!
//! Cloneable `Arc<RwLock>` wrapper so the invoice registry and transfer
//! drivers can observe one ledger instance. Mirrors how the system is wired
//! at deployment: the registry is constructed against an already-live token.

use crate::domain::{Genesis, LedgerError, TokenLedger, TokenMetadata};
use med_types::{Address, U256};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Thread-safe shared handle to a [`TokenLedger`].
///
/// Every method acquires the inner lock for the duration of a single call,
/// so each operation is individually atomic. The handle does not hold the
/// lock between calls: callers composing a read of their own with a later
/// mutation must serialize those calls externally.
#[derive(Debug, Clone)]
pub struct SharedLedger {
    inner: Arc<RwLock<TokenLedger>>,
}

impl SharedLedger {
    /// Creates a shared handle over a freshly constructed ledger.
    #[must_use]
    pub fn new(genesis: Genesis) -> Self {
        Self::from_ledger(TokenLedger::new(genesis))
    }

    /// Wraps an existing ledger.
    #[must_use]
    pub fn from_ledger(ledger: TokenLedger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    /// Returns the balance of `account`, zero if never credited.
    #[must_use]
    pub fn balance_of(&self, account: &Address) -> U256 {
        self.inner.read().unwrap().balance_of(account)
    }

    /// Returns the fixed total supply.
    #[must_use]
    pub fn total_supply(&self) -> U256 {
        self.inner.read().unwrap().total_supply()
    }

    /// Returns a copy of the token's display identity.
    #[must_use]
    pub fn metadata(&self) -> TokenMetadata {
        self.inner.read().unwrap().metadata().clone()
    }

    /// Moves `amount` base units from `caller` to `to`.
    ///
    /// Takes the write lock for the whole debit-and-credit, so no reader
    /// ever observes a half-applied transfer.
    ///
    /// # Errors
    /// - `InsufficientBalance` if `caller` holds less than `amount`
    /// - `Overflow` if crediting `to` would exceed 256 bits
    pub fn transfer(
        &self,
        caller: &Address,
        to: &Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        let mut ledger = self.inner.write().unwrap();
        match ledger.transfer(caller, to, amount) {
            Ok(()) => {
                debug!(from = %caller, to = %to, %amount, "transfer applied");
                Ok(())
            }
            Err(err) => {
                debug!(from = %caller, to = %to, %amount, error = %err, "transfer rejected");
                Err(err)
            }
        }
    }

    /// Reports whether the balance sum still equals the total supply.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        self.inner.read().unwrap().is_conserved()
    }
}

// =============================================================================
// TESTS
// =============================================================================
