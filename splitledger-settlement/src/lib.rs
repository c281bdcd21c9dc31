//! SplitLedger Settlement
//!
//! Settlement planning and orchestration for the two-party shared ledger.
//!
//! # Flow
//!
//! 1. **Recompute**: derive the net balance from the full transaction set
//! 2. **Plan**: below tolerance → settled; otherwise propose who pays whom
//! 3. **Confirm**: append exactly one settlement transaction
//! 4. **Notify**: best-effort message to the owed party, never blocking
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use splitledger_core::{Currency, MemoryStore, Parties};
//! use splitledger_settlement::{Config, LogSink, SettlementEngine, SettlementPlan};
//!
//! #[tokio::main]
//! async fn main() -> splitledger_settlement::Result<()> {
//!     let engine = SettlementEngine::new(
//!         Arc::new(MemoryStore::new()),
//!         Arc::new(LogSink),
//!         Parties::new("Asha", "Ben"),
//!         Currency::USD,
//!         Config::default(),
//!     )?;
//!
//!     if let SettlementPlan::Proposal(proposal) = engine.plan_settlement().await? {
//!         engine.confirm_settlement(proposal).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod config;
pub mod engine;
pub mod error;
pub mod notify;
pub mod planner;

// Re-exports
pub use config::Config;
pub use engine::SettlementEngine;
pub use error::{Error, Result};
pub use notify::{FailingSink, LogSink, Notification, NotificationSink, RecordingSink};
pub use planner::{
    SettlementPlan, SettlementPlanner, SettlementProposal, SETTLEMENT_MEMO,
};
