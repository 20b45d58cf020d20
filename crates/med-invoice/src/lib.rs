//! # Invoice Registry
//!
//! Balance-gated, append-only per-account file store. An account may append
//! an opaque payload only while it holds PPT tokens; reads are ungated and
//! never fail.
//!
//! ## Purpose
//!
//! Keeps the account → payload-list mapping for invoice documents. The sole
//! mutation (`save_file`) is authorized against the caller's current token
//! balance, read through a read-only port onto the ledger; the registry
//! never writes to the ledger.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Gate before write | `domain/registry.rs` - balance guard precedes any mutation |
//! | Acceptance order preserved | `domain/registry.rs` - per-account `Vec` push only |
//! | Reads ungated and allocation-free | `domain/registry.rs` - `get_files()` never inserts |
//! | Ledger never mutated | `ports/outbound.rs` - `BalanceSource` exposes reads only |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  adapters/ledger_source.rs - BalanceSource over SharedLedger    │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - InvoiceApi trait                           │
//! │  ports/outbound.rs - BalanceSource trait                        │
//! │  application/service.rs - InvoiceService (API + diagnostics)    │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/registry.rs - InvoiceRegistry (gated append log)        │
//! │  domain/errors.rs   - RegistryError enum                        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub use application::*;
pub use domain::*;
