//! Core types for the shared ledger
//!
//! All types are designed for:
//! - Deterministic serialization (bincode)
//! - Exact arithmetic (Decimal for money)
//! - Two fixed parties, names injected at configuration time

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// One of the two fixed participants in the shared ledger.
///
/// The engine only ever knows `A` and `B`; display names and notification
/// recipients are configuration (see [`Parties`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    /// First party
    A,
    /// Second party
    B,
}

impl Party {
    /// The counterparty
    pub fn other(&self) -> Party {
        match self {
            Party::A => Party::B,
            Party::B => Party::A,
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::A => write!(f, "A"),
            Party::B => write!(f, "B"),
        }
    }
}

/// Display names for the two parties, injected at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parties {
    /// Display name for party A
    pub a: String,
    /// Display name for party B
    pub b: String,
}

impl Parties {
    /// Create from the two display names
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// Display name for a party
    pub fn name(&self, party: Party) -> &str {
        match party {
            Party::A => &self.a,
            Party::B => &self.b,
        }
    }
}

/// The party (or both) on whose behalf a transaction's amount was spent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Beneficiary {
    /// A single party benefits
    Party(Party),
    /// Both parties benefit (50/50 split)
    Both,
}

impl fmt::Display for Beneficiary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Beneficiary::Party(p) => write!(f, "{}", p),
            Beneficiary::Both => write!(f, "Both"),
        }
    }
}

/// Transaction kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TransactionKind {
    /// Money coming in
    Income = 1,
    /// Money going out
    Expense = 2,
    /// Money set aside
    Investment = 3,
}

impl TransactionKind {
    /// Stable string form (matches the store's enum column)
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
            TransactionKind::Investment => "investment",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            "investment" => Some(TransactionKind::Investment),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// ISO 4217 currency code (single reporting currency per ledger)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Currency {
    /// US Dollar
    USD,
    /// Euro
    EUR,
    /// British Pound
    GBP,
    /// Indian Rupee
    INR,
}

impl Currency {
    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::INR => "INR",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "INR" => Some(Currency::INR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Immutable record of one monetary event between the two parties
///
/// Conceptually append-only: once appended to the store it is never
/// modified. A settlement transaction is indistinguishable from a manual
/// one once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction ID
    pub id: Uuid,

    /// Who paid (never `Both`)
    pub payer: Party,

    /// On whose behalf the amount was spent
    pub beneficiary: Beneficiary,

    /// Amount, always positive
    pub amount: Decimal,

    /// Reporting currency
    pub currency: Currency,

    /// Transaction kind
    pub kind: TransactionKind,

    /// Free-form memo
    pub memo: String,

    /// Day the event happened (primary display ordering)
    pub occurred_at: NaiveDate,

    /// When the record entered the ledger (tie-breaker)
    pub recorded_at: DateTime<Utc>,
}

/// Signed net balance of the two-party ledger
///
/// Sign convention: positive = Party B owes Party A; negative = Party A
/// owes Party B; within tolerance of zero = settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetBalance(Decimal);

impl NetBalance {
    /// The zero balance
    pub const ZERO: NetBalance = NetBalance(Decimal::ZERO);

    /// Wrap a signed amount
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Signed amount owed to party A
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Absolute magnitude
    pub fn magnitude(&self) -> Decimal {
        self.0.abs()
    }

    /// True when the magnitude is below the given tolerance
    pub fn is_settled_within(&self, tolerance: Decimal) -> bool {
        self.0.abs() < tolerance
    }

    /// The party that currently owes money, if any (ignoring tolerance)
    pub fn owing_party(&self) -> Option<Party> {
        if self.0 > Decimal::ZERO {
            Some(Party::B)
        } else if self.0 < Decimal::ZERO {
            Some(Party::A)
        } else {
            None
        }
    }
}

impl fmt::Display for NetBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_other() {
        assert_eq!(Party::A.other(), Party::B);
        assert_eq!(Party::B.other(), Party::A);
    }

    #[test]
    fn test_parties_names() {
        let parties = Parties::new("Asha", "Ben");
        assert_eq!(parties.name(Party::A), "Asha");
        assert_eq!(parties.name(Party::B), "Ben");
    }

    #[test]
    fn test_kind_round_trip() {
        assert_eq!(TransactionKind::parse("expense"), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::parse("income"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::parse("bogus"), None);
        assert_eq!(TransactionKind::Investment.as_str(), "investment");
    }

    #[test]
    fn test_currency_parse() {
        assert_eq!(Currency::parse("USD"), Some(Currency::USD));
        assert_eq!(Currency::parse("INVALID"), None);
    }

    #[test]
    fn test_net_balance_owing_party() {
        assert_eq!(NetBalance::new(Decimal::new(5000, 2)).owing_party(), Some(Party::B));
        assert_eq!(NetBalance::new(Decimal::new(-5000, 2)).owing_party(), Some(Party::A));
        assert_eq!(NetBalance::ZERO.owing_party(), None);
    }

    #[test]
    fn test_net_balance_tolerance() {
        let tolerance = Decimal::new(1, 2); // 0.01
        assert!(NetBalance::new(Decimal::new(5, 3)).is_settled_within(tolerance)); // 0.005
        assert!(!NetBalance::new(Decimal::new(1, 2)).is_settled_within(tolerance)); // 0.01
        assert!(!NetBalance::new(Decimal::new(-2, 2)).is_settled_within(tolerance)); // -0.02
    }
}
