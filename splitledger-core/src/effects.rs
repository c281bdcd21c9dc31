//! Effect rule evaluator
//!
//! Maps one transaction to its signed effect on each party's balance.
//! The rule is a pure total function over the three payer/beneficiary
//! combinations a two-party ledger admits:
//!
//! 1. Self-funded (payer == beneficiary): no effect.
//! 2. Beneficiary is both: 50/50 split, payer is owed the other half.
//! 3. Beneficiary is the other party: payer is owed the full amount.
//!
//! Deltas are expressed on the "amount owed to A" axis, so
//! `delta_b == -delta_a` always and one accumulator suffices downstream.

use crate::types::{Beneficiary, Party, Transaction};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Signed balance effect of a single transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEffect {
    /// Change in the amount owed to party A
    pub delta_a: Decimal,

    /// Change in the amount owed to party B (always `-delta_a`)
    pub delta_b: Decimal,
}

impl BalanceEffect {
    /// The zero effect
    pub const ZERO: BalanceEffect = BalanceEffect {
        delta_a: Decimal::ZERO,
        delta_b: Decimal::ZERO,
    };
}

/// Evaluate a transaction's effect on both balances
///
/// Amount positivity is enforced at draft validation and never re-checked
/// here.
pub fn evaluate(txn: &Transaction) -> BalanceEffect {
    let delta_a = match txn.beneficiary {
        // Rule 1: self-funded, nothing owed either way
        Beneficiary::Party(beneficiary) if beneficiary == txn.payer => Decimal::ZERO,

        // Rule 2: split 50/50, payer is owed the counterparty's half
        Beneficiary::Both => {
            let half = txn.amount / Decimal::TWO;
            match txn.payer {
                Party::A => half,
                Party::B => -half,
            }
        }

        // Rule 3: payer covered the other party's full cost
        Beneficiary::Party(_) => match txn.payer {
            Party::A => txn.amount,
            Party::B => -txn.amount,
        },
    };

    BalanceEffect {
        delta_a,
        delta_b: -delta_a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Currency, TransactionKind};
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn txn(payer: Party, beneficiary: Beneficiary, cents: i64) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            payer,
            beneficiary,
            amount: Decimal::new(cents, 2),
            currency: Currency::USD,
            kind: TransactionKind::Expense,
            memo: String::new(),
            occurred_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn test_self_funded_is_neutral() {
        let effect = evaluate(&txn(Party::A, Beneficiary::Party(Party::A), 3000));
        assert_eq!(effect, BalanceEffect::ZERO);

        let effect = evaluate(&txn(Party::B, Beneficiary::Party(Party::B), 3000));
        assert_eq!(effect, BalanceEffect::ZERO);
    }

    #[test]
    fn test_split_both_payer_a() {
        // A pays 100 for both: B owes A 50
        let effect = evaluate(&txn(Party::A, Beneficiary::Both, 10000));
        assert_eq!(effect.delta_a, Decimal::new(5000, 2));
        assert_eq!(effect.delta_b, Decimal::new(-5000, 2));
    }

    #[test]
    fn test_split_both_payer_b() {
        let effect = evaluate(&txn(Party::B, Beneficiary::Both, 10000));
        assert_eq!(effect.delta_a, Decimal::new(-5000, 2));
        assert_eq!(effect.delta_b, Decimal::new(5000, 2));
    }

    #[test]
    fn test_full_assumption_payer_a() {
        // A pays 80 entirely for B: B owes A the full 80
        let effect = evaluate(&txn(Party::A, Beneficiary::Party(Party::B), 8000));
        assert_eq!(effect.delta_a, Decimal::new(8000, 2));
        assert_eq!(effect.delta_b, Decimal::new(-8000, 2));
    }

    #[test]
    fn test_full_assumption_payer_b() {
        let effect = evaluate(&txn(Party::B, Beneficiary::Party(Party::A), 8000));
        assert_eq!(effect.delta_a, Decimal::new(-8000, 2));
        assert_eq!(effect.delta_b, Decimal::new(8000, 2));
    }

    #[test]
    fn test_zero_sum_holds_exactly() {
        for (payer, beneficiary) in [
            (Party::A, Beneficiary::Both),
            (Party::B, Beneficiary::Both),
            (Party::A, Beneficiary::Party(Party::B)),
            (Party::B, Beneficiary::Party(Party::A)),
            (Party::A, Beneficiary::Party(Party::A)),
        ] {
            let effect = evaluate(&txn(payer, beneficiary, 12345));
            assert_eq!(effect.delta_a + effect.delta_b, Decimal::ZERO);
        }
    }

    #[test]
    fn test_odd_cent_split_is_exact() {
        // 0.01 for both: each half is exactly 0.005, no drift
        let effect = evaluate(&txn(Party::A, Beneficiary::Both, 1));
        assert_eq!(effect.delta_a, Decimal::new(5, 3));
        assert_eq!(effect.delta_a + effect.delta_b, Decimal::ZERO);
    }
}
