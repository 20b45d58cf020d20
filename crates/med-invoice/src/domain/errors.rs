//! Registry error taxonomy.

use med_types::Address;
use thiserror::Error;

/// Reasons the registry refuses a mutation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The caller holds no tokens, so the write gate is closed.
    #[error("unauthorized: {account} holds no tokens")]
    Unauthorized { account: Address },
}

// ============================================================
// Tests
// ============================================================
