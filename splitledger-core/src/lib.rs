//! SplitLedger Core
//!
//! Shared-expense ledger between exactly two parties, with the net
//! balance derived from transaction history on every read.
//!
//! # Architecture
//!
//! - **Derived state**: the balance is re-folded from the full
//!   transaction set on every read; no cached balance is authoritative
//! - **Pure core**: effect evaluation and the balance fold are pure
//!   functions over immutable transaction records
//! - **Exact arithmetic**: all money is `rust_decimal::Decimal`
//!
//! # Invariants
//!
//! - Zero-sum: `delta_a + delta_b == 0` for every transaction
//! - Order-independence: the final net balance is the same for any
//!   permutation of the same transaction set
//! - Idempotent recomputation: same set, same view, bit for bit

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod balance;
pub mod config;
pub mod draft;
pub mod effects;
pub mod error;
pub mod storage;
pub mod store;
pub mod types;

// Re-exports
pub use balance::{compute, LedgerEntry, LedgerView};
pub use config::Config;
pub use draft::TransactionDraft;
pub use effects::{evaluate, BalanceEffect};
pub use error::{Error, Result};
pub use storage::RocksDbStore;
pub use store::{LedgerStore, MemoryStore};
pub use types::{
    Beneficiary, Currency, NetBalance, Parties, Party, Transaction, TransactionKind,
};
