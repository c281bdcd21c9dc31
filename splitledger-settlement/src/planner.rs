//! Settlement planner
//!
//! Turns a derived net balance into either "already settled" or a
//! concrete proposal that zeroes it. The sign of the net balance picks
//! the owing party; the proposal amount is always the magnitude.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use splitledger_core::{
    Beneficiary, Currency, NetBalance, Party, Transaction, TransactionKind,
};
use uuid::Uuid;

/// Memo written on every settlement transaction
pub const SETTLEMENT_MEMO: &str = "Settlement";

/// Outcome of planning against the current net balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SettlementPlan {
    /// Balance is within tolerance of zero; nothing to do
    Settled,
    /// One transaction would return the balance to zero
    Proposal(SettlementProposal),
}

/// A settlement the owing party can confirm with one click
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementProposal {
    /// Party that owes and would pay
    pub owing_party: Party,

    /// Party that is owed and would receive
    pub owed_party: Party,

    /// Magnitude of the current net balance
    pub amount: Decimal,
}

impl SettlementProposal {
    /// Materialize the proposal as a ledger transaction
    ///
    /// Once appended it is indistinguishable from a manual transaction:
    /// expense kind, fixed memo, payer = owing, beneficiary = owed.
    pub fn into_transaction(self, currency: Currency, occurred_at: NaiveDate) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            payer: self.owing_party,
            beneficiary: Beneficiary::Party(self.owed_party),
            amount: self.amount,
            currency,
            kind: TransactionKind::Expense,
            memo: SETTLEMENT_MEMO.to_string(),
            occurred_at,
            recorded_at: Utc::now(),
        }
    }
}

/// Settlement planner
#[derive(Debug, Clone)]
pub struct SettlementPlanner {
    /// Balances below this magnitude count as settled
    tolerance: Decimal,
}

impl SettlementPlanner {
    /// Create a planner with the given tolerance
    pub fn new(tolerance: Decimal) -> Self {
        Self { tolerance }
    }

    /// Plan against a net balance
    pub fn plan(&self, net: NetBalance) -> SettlementPlan {
        if net.is_settled_within(self.tolerance) {
            return SettlementPlan::Settled;
        }

        // Sign convention: positive net = B owes A
        let owing_party = if net.amount() > Decimal::ZERO {
            Party::B
        } else {
            Party::A
        };

        SettlementPlan::Proposal(SettlementProposal {
            owing_party,
            owed_party: owing_party.other(),
            amount: net.magnitude(),
        })
    }
}

impl Default for SettlementPlanner {
    fn default() -> Self {
        Self::new(Decimal::new(1, 2)) // 0.01
    }
}
