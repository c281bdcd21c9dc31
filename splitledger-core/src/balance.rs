//! Balance calculator
//!
//! Folds the full transaction history into per-transaction effects,
//! running snapshots, and the final net balance. Every read recomputes
//! from scratch; no cached balance is ever authoritative.

use crate::{
    effects::{self, BalanceEffect},
    types::{NetBalance, Transaction},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the derived ledger view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// The underlying transaction
    pub transaction: Transaction,

    /// Its signed effect on both balances
    pub effect: BalanceEffect,

    /// Net balance after this transaction (owed-to-A axis)
    pub running_balance: Decimal,
}

/// Derived, never-persisted view of the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerView {
    /// Entries in display order (occurred_at, then recorded_at)
    pub entries: Vec<LedgerEntry>,

    /// Final net balance
    pub net: NetBalance,
}

impl LedgerView {
    /// Empty view
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            net: NetBalance::ZERO,
        }
    }
}

/// Compute the ledger view from an unordered transaction set
///
/// Transactions are sorted ascending by `occurred_at` with ties broken by
/// `recorded_at` (display determinism), then folded left to right. Since
/// `delta_b == -delta_a` for every effect, one accumulator carries the
/// whole balance. Total accumulation is commutative, so the final net is
/// independent of input order; only the display ordering needs the sort.
pub fn compute(mut transactions: Vec<Transaction>) -> LedgerView {
    transactions.sort_by(|a, b| {
        a.occurred_at
            .cmp(&b.occurred_at)
            .then_with(|| a.recorded_at.cmp(&b.recorded_at))
    });

    let mut balance = Decimal::ZERO;
    let entries = transactions
        .into_iter()
        .map(|transaction| {
            let effect = effects::evaluate(&transaction);
            balance += effect.delta_a;
            LedgerEntry {
                transaction,
                effect,
                running_balance: balance,
            }
        })
        .collect();

    LedgerView {
        entries,
        net: NetBalance::new(balance),
    }
}
