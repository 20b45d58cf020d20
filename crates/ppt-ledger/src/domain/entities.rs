//! # Ledger Entities
//!
//! Construction-time configuration for the token ledger. Everything here is
//! fixed once the ledger exists.

use serde::{Deserialize, Serialize};

pub use med_types::{Address, U256};

/// Display identity of the token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Human-readable token name.
    pub name: String,
    /// Short ticker symbol.
    pub symbol: String,
    /// Base-unit scale: one whole token is 10^decimals base units.
    pub decimals: u8,
}

impl Default for TokenMetadata {
    fn default() -> Self {
        Self {
            name: "PPT Token".to_string(),
            symbol: "PPT".to_string(),
            decimals: 18,
        }
    }
}

/// Construction-time parameters for a [`TokenLedger`](super::ledger::TokenLedger).
///
/// The full `initial_supply` is credited to `initial_holder`; no further
/// issuance exists afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Genesis {
    /// Total supply in base units, fixed for the ledger's lifetime.
    pub initial_supply: U256,
    /// Account credited with the entire initial supply.
    pub initial_holder: Address,
    /// Token display identity.
    pub metadata: TokenMetadata,
}

impl Genesis {
    /// Creates a genesis with the default PPT metadata.
    #[must_use]
    pub fn new(initial_supply: U256, initial_holder: Address) -> Self {
        Self {
            initial_supply,
            initial_holder,
            metadata: TokenMetadata::default(),
        }
    }

    /// Replaces the token metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: TokenMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}
