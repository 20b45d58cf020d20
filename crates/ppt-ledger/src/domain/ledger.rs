//! # Token Ledger - Fixed Supply, Conserving Transfers
//!
//! Core balance state machine. The whole supply is credited to one holder at
//! construction; afterwards value only moves between accounts via
//! [`TokenLedger::transfer`], which debits and credits in one observable
//! step.
//!
//! ## Data Structures
//!
//! - `balances`: account → balance in base units. Conceptually total: absent
//!   accounts read as zero, and reads never insert entries.
//!
//! ## Invariants Enforced
//!
//! - Conservation: the balance sum equals the fixed total supply (checked in
//!   debug builds after every transfer)
//! - No negative balances: debits are guarded before any write
//! - No silent wrap: the credit side uses checked arithmetic and fails closed

use super::entities::{Address, Genesis, TokenMetadata, U256};
use super::errors::LedgerError;
use std::collections::HashMap;

/// Account → balance map with a fixed total supply.
///
/// INVARIANTS:
/// - `total_supply` never changes after construction
/// - the sum of all entries in `balances` equals `total_supply`
/// - a failed transfer leaves both balances untouched
#[derive(Debug, Clone)]
pub struct TokenLedger {
    /// Token display identity (name, symbol, decimals).
    metadata: TokenMetadata,
    /// Fixed total supply, in base units.
    total_supply: U256,
    /// Materialized balances. Accounts never credited have no entry and read
    /// as zero.
    balances: HashMap<Address, U256>,
}

impl TokenLedger {
    /// Creates a ledger with the whole supply credited to the genesis holder.
    #[must_use]
    pub fn new(genesis: Genesis) -> Self {
        let mut balances = HashMap::new();
        if !genesis.initial_supply.is_zero() {
            balances.insert(genesis.initial_holder, genesis.initial_supply);
        }
        Self {
            metadata: genesis.metadata,
            total_supply: genesis.initial_supply,
            balances,
        }
    }

    /// Returns the token's display identity.
    #[must_use]
    pub fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    /// Returns the fixed total supply.
    #[must_use]
    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }

    /// Returns the balance of `account`, zero if never credited.
    ///
    /// Pure read: cannot fail and never materializes an entry.
    #[must_use]
    pub fn balance_of(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    /// Returns the number of accounts with a materialized balance entry.
    #[must_use]
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    /// Moves `amount` base units from `caller` to `to`.
    ///
    /// Debit and credit land together or not at all; a failed call leaves
    /// both balances exactly as they were. A self-transfer of any affordable
    /// amount round-trips to the same balance.
    ///
    /// # Errors
    /// - `InsufficientBalance` if `caller` holds less than `amount`
    /// - `Overflow` if crediting `to` would exceed 256 bits (unreachable
    ///   while conservation holds)
    pub fn transfer(
        &mut self,
        caller: &Address,
        to: &Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        let available = self.balance_of(caller);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                required: amount,
                available,
            });
        }

        // Nothing moves: skip the writes so no zero entry is materialized
        // and a self-transfer cannot double-count.
        if amount.is_zero() || caller == to {
            return Ok(());
        }

        let recipient_balance = self.balance_of(to);
        let credited = recipient_balance
            .checked_add(amount)
            .ok_or(LedgerError::Overflow {
                account: *to,
                balance: recipient_balance,
                amount,
            })?;

        // All guards passed; both sides land in the same call.
        self.balances.insert(*caller, available - amount);
        self.balances.insert(*to, credited);

        debug_assert!(
            self.is_conserved(),
            "balance sum diverged from total supply"
        );
        Ok(())
    }

    /// Reports whether the sum of all balances equals the total supply.
    ///
    /// The sum is accumulated with checked arithmetic so a corrupted map
    /// cannot wrap its way back to looking consistent.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        let mut sum = U256::zero();
        for balance in self.balances.values() {
            match sum.checked_add(*balance) {
                Some(next) => sum = next,
                None => return false,
            }
        }
        sum == self.total_supply
    }
}

// =============================================================================
// TESTS
// =============================================================================
