//! Transaction drafts and validation
//!
//! A draft is the freely mutable in-memory form a transaction passes
//! through before it is appended. Drafts come from manual entry or from
//! document/voice extraction adapters; the ledger re-validates them all
//! the same way rather than trusting upstream extraction.

use crate::{
    error::{Error, Result},
    types::{Beneficiary, Currency, Party, Transaction, TransactionKind},
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Freely mutable transaction draft
///
/// Required fields are `Option`s so a half-filled form can round-trip
/// through the UI; [`TransactionDraft::validate`] enumerates everything
/// that is still missing or invalid in one pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionDraft {
    /// Who paid
    pub payer: Option<Party>,

    /// On whose behalf
    pub beneficiary: Option<Beneficiary>,

    /// Amount, must end up positive
    pub amount: Option<Decimal>,

    /// Reporting currency
    pub currency: Option<Currency>,

    /// Transaction kind
    pub kind: Option<TransactionKind>,

    /// Free-form memo
    pub memo: String,

    /// Day the event happened
    pub occurred_at: Option<NaiveDate>,
}

impl TransactionDraft {
    /// Empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Set payer
    pub fn payer(mut self, payer: Party) -> Self {
        self.payer = Some(payer);
        self
    }

    /// Set beneficiary
    pub fn beneficiary(mut self, beneficiary: Beneficiary) -> Self {
        self.beneficiary = Some(beneficiary);
        self
    }

    /// Set amount
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set currency
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Set kind
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set memo
    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    /// Set occurred_at
    pub fn occurred_at(mut self, date: NaiveDate) -> Self {
        self.occurred_at = Some(date);
        self
    }

    /// Validate the draft into an immutable [`Transaction`]
    ///
    /// Checks every field and returns a single [`Error::Validation`]
    /// listing all problems, so the caller can surface them together.
    /// Nothing is appended on failure; the draft stays usable for
    /// correction and resubmission.
    pub fn validate(&self) -> Result<Transaction> {
        let mut missing = Vec::new();

        if self.payer.is_none() {
            missing.push("payer".to_string());
        }
        if self.beneficiary.is_none() {
            missing.push("beneficiary".to_string());
        }
        match self.amount {
            None => missing.push("amount".to_string()),
            Some(amount) if amount <= Decimal::ZERO => {
                missing.push("amount (must be positive)".to_string());
            }
            Some(_) => {}
        }
        if self.currency.is_none() {
            missing.push("currency".to_string());
        }
        if self.kind.is_none() {
            missing.push("kind".to_string());
        }
        if self.occurred_at.is_none() {
            missing.push("occurred_at".to_string());
        }

        match (
            self.payer,
            self.beneficiary,
            self.amount,
            self.currency,
            self.kind,
            self.occurred_at,
        ) {
            (Some(payer), Some(beneficiary), Some(amount), Some(currency), Some(kind), Some(occurred_at))
                if missing.is_empty() =>
            {
                Ok(Transaction {
                    id: Uuid::new_v4(),
                    payer,
                    beneficiary,
                    amount,
                    currency,
                    kind,
                    memo: self.memo.clone(),
                    occurred_at,
                    recorded_at: Utc::now(),
                })
            }
            _ => Err(Error::Validation(missing)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> TransactionDraft {
        TransactionDraft::new()
            .payer(Party::A)
            .beneficiary(Beneficiary::Both)
            .amount(Decimal::new(10000, 2)) // 100.00
            .currency(Currency::USD)
            .kind(TransactionKind::Expense)
            .memo("Groceries")
            .occurred_at(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    }

    #[test]
    fn test_valid_draft() {
        let txn = complete_draft().validate().unwrap();
        assert_eq!(txn.payer, Party::A);
        assert_eq!(txn.beneficiary, Beneficiary::Both);
        assert_eq!(txn.amount, Decimal::new(10000, 2));
        assert_eq!(txn.memo, "Groceries");
    }

    #[test]
    fn test_empty_draft_lists_all_fields() {
        let err = TransactionDraft::new().validate().unwrap_err();
        match err {
            Error::Validation(missing) => {
                assert!(missing.iter().any(|f| f == "payer"));
                assert!(missing.iter().any(|f| f == "beneficiary"));
                assert!(missing.iter().any(|f| f == "amount"));
                assert!(missing.iter().any(|f| f == "currency"));
                assert!(missing.iter().any(|f| f == "kind"));
                assert!(missing.iter().any(|f| f == "occurred_at"));
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_amount_rejected() {
        let err = complete_draft().amount(Decimal::ZERO).validate().unwrap_err();
        match err {
            Error::Validation(missing) => {
                assert_eq!(missing, vec!["amount (must be positive)".to_string()]);
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = complete_draft().amount(Decimal::new(-500, 2)).validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_draft_reusable_after_failure() {
        let mut draft = complete_draft();
        draft.amount = None;
        assert!(draft.validate().is_err());

        // Same draft, corrected, now passes
        draft.amount = Some(Decimal::new(2500, 2));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_each_transaction_gets_fresh_id() {
        let draft = complete_draft();
        let a = draft.validate().unwrap();
        let b = draft.validate().unwrap();
        assert_ne!(a.id, b.id);
    }
}
