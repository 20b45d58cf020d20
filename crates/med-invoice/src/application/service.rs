//! # Invoice Service
//!
//! [`InvoiceApi`] implementation over the domain registry. The domain stays
//! silent; every accepted or rejected write is logged here with structured
//! fields so operators can trace storage activity per account.

use med_types::{Address, Bytes, U256};
use tracing::{debug, warn};

use crate::domain::errors::RegistryError;
use crate::domain::registry::{InvoiceRegistry, RegistryStats};
use crate::ports::inbound::InvoiceApi;
use crate::ports::outbound::BalanceSource;

/// Application service wrapping the registry with diagnostics.
pub struct InvoiceService<B: BalanceSource> {
    registry: InvoiceRegistry<B>,
}

impl<B: BalanceSource> InvoiceService<B> {
    /// Builds a service over a fresh registry gated on `ledger`.
    #[must_use]
    pub fn new(ledger: B) -> Self {
        Self {
            registry: InvoiceRegistry::new(ledger),
        }
    }

    /// Occupancy counters for diagnostics.
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        self.registry.stats()
    }
}

impl<B: BalanceSource> InvoiceApi for InvoiceService<B> {
    fn save_file(&mut self, caller: &Address, payload: Bytes) -> Result<(), RegistryError> {
        let size = payload.len();
        match self.registry.save_file(caller, payload) {
            Ok(()) => {
                let stats = self.registry.stats();
                debug!(
                    account = %caller,
                    bytes = size,
                    total_files = stats.total_files,
                    "file stored"
                );
                Ok(())
            }
            Err(err) => {
                warn!(account = %caller, bytes = size, error = %err, "file rejected");
                Err(err)
            }
        }
    }

    fn get_files(&self, caller: &Address) -> Vec<Bytes> {
        self.registry.get_files(caller).to_vec()
    }

    fn get_user_tokens(&self, caller: &Address) -> U256 {
        self.registry.get_user_tokens(caller)
    }
}

// ============================================================
// Tests
// ============================================================
