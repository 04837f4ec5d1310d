//! Transaction model
//!
//! A transaction is a single signed monetary movement with a date and a
//! list of participants. The two concrete kinds are expenses (money spent,
//! tagged with a category) and income (money received, tagged with a
//! source), expressed as variants of a single tagged type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A single monetary movement recorded in the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Transaction {
    /// Money spent, tagged with a category
    Expense(Expense),
    /// Money received, tagged with a source
    Income(Income),
}

impl Transaction {
    /// The signed amount (income positive, expense non-positive)
    pub fn amount(&self) -> Money {
        match self {
            Self::Expense(e) => e.amount(),
            Self::Income(i) => i.amount(),
        }
    }

    /// The transaction date
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Expense(e) => e.date(),
            Self::Income(i) => i.date(),
        }
    }

    /// Other parties involved in the transaction
    pub fn participants(&self) -> &[String] {
        match self {
            Self::Expense(e) => e.participants(),
            Self::Income(i) => i.participants(),
        }
    }

    /// The category or source label, depending on the variant
    pub fn label(&self) -> &str {
        match self {
            Self::Expense(e) => e.category(),
            Self::Income(i) => i.source(),
        }
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense(_))
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income(_))
    }

    /// Borrow the expense record, if this is one
    pub fn as_expense(&self) -> Option<&Expense> {
        match self {
            Self::Expense(e) => Some(e),
            Self::Income(_) => None,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:20} {:>12}",
            self.date().format("%Y-%m-%d"),
            self.label(),
            self.amount().to_string()
        )
    }
}

impl From<Expense> for Transaction {
    fn from(expense: Expense) -> Self {
        Self::Expense(expense)
    }
}

impl From<Income> for Transaction {
    fn from(income: Income) -> Self {
        Self::Income(income)
    }
}

/// Money spent, tagged with a category
///
/// The stored amount is the negation of the construction magnitude, so an
/// expense's amount is never positive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    amount: Money,
    date: NaiveDate,
    category: String,
    #[serde(default)]
    participants: Vec<String>,
}

impl Expense {
    /// Create an expense from a positive magnitude.
    ///
    /// The sign is normalized here: whatever sign the caller passes, the
    /// stored amount is `-magnitude.abs()`.
    pub fn new(magnitude: Money, date: NaiveDate, category: impl Into<String>) -> Self {
        Self {
            amount: -magnitude.abs(),
            date,
            category: category.into(),
            participants: Vec::new(),
        }
    }

    /// Create an expense with participants
    pub fn with_participants(
        magnitude: Money,
        date: NaiveDate,
        category: impl Into<String>,
        participants: Vec<String>,
    ) -> Self {
        let mut expense = Self::new(magnitude, date, category);
        expense.participants = participants;
        expense
    }

    /// The signed amount (always zero or negative)
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// The original positive cost
    pub fn magnitude(&self) -> Money {
        self.amount.abs()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

/// Money received, tagged with a source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    amount: Money,
    date: NaiveDate,
    source: String,
    #[serde(default)]
    participants: Vec<String>,
}

impl Income {
    /// Create an income record from a magnitude.
    ///
    /// The stored amount is `magnitude.abs()`, so income is never negative.
    pub fn new(magnitude: Money, date: NaiveDate, source: impl Into<String>) -> Self {
        Self {
            amount: magnitude.abs(),
            date,
            source: source.into(),
            participants: Vec::new(),
        }
    }

    /// Create an income record with participants
    pub fn with_participants(
        magnitude: Money,
        date: NaiveDate,
        source: impl Into<String>,
        participants: Vec<String>,
    ) -> Self {
        let mut income = Self::new(magnitude, date, source);
        income.participants = participants;
        income
    }

    /// The signed amount (always zero or positive)
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Validate the income record
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.source.trim().is_empty() {
            return Err(TransactionValidationError::EmptySource);
        }
        Ok(())
    }
}

impl fmt::Display for Income {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.source,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyCategory,
    EmptySource,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Expense category must not be empty"),
            Self::EmptySource => write!(f, "Income source must not be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_expense_sign_normalization() {
        let e = Expense::new(Money::from_cents(1250), date(2025, 1, 15), "food");
        assert_eq!(e.amount().cents(), -1250);
        assert_eq!(e.magnitude().cents(), 1250);

        // An already-negative input cannot produce a positive amount
        let e = Expense::new(Money::from_cents(-1250), date(2025, 1, 15), "food");
        assert_eq!(e.amount().cents(), -1250);
    }

    #[test]
    fn test_income_sign_normalization() {
        let i = Income::new(Money::from_cents(100_000), date(2025, 1, 1), "salary");
        assert_eq!(i.amount().cents(), 100_000);

        let i = Income::new(Money::from_cents(-100_000), date(2025, 1, 1), "salary");
        assert_eq!(i.amount().cents(), 100_000);
    }

    #[test]
    fn test_participants_are_fresh_per_construction() {
        let mut a = Expense::with_participants(
            Money::from_cents(1000),
            date(2025, 1, 15),
            "food",
            vec!["alex".into()],
        );
        let b = Expense::new(Money::from_cents(1000), date(2025, 1, 15), "food");

        a.participants.push("sam".into());
        assert_eq!(a.participants().len(), 2);
        assert!(b.participants().is_empty());
    }

    #[test]
    fn test_validation() {
        let e = Expense::new(Money::from_cents(1000), date(2025, 1, 15), "food");
        assert!(e.validate().is_ok());

        let e = Expense::new(Money::from_cents(1000), date(2025, 1, 15), "  ");
        assert_eq!(
            e.validate(),
            Err(TransactionValidationError::EmptyCategory)
        );

        let i = Income::new(Money::from_cents(1000), date(2025, 1, 15), "");
        assert_eq!(i.validate(), Err(TransactionValidationError::EmptySource));
    }

    #[test]
    fn test_transaction_accessors() {
        let t: Transaction =
            Expense::new(Money::from_cents(1250), date(2025, 1, 15), "food").into();
        assert!(t.is_expense());
        assert!(!t.is_income());
        assert_eq!(t.amount().cents(), -1250);
        assert_eq!(t.label(), "food");
        assert!(t.as_expense().is_some());

        let t: Transaction =
            Income::new(Money::from_cents(100_000), date(2025, 1, 1), "salary").into();
        assert!(t.is_income());
        assert_eq!(t.amount().cents(), 100_000);
        assert_eq!(t.label(), "salary");
        assert!(t.as_expense().is_none());
    }

    #[test]
    fn test_serialization_round_trip() {
        let t: Transaction = Expense::with_participants(
            Money::from_cents(1250),
            date(2025, 1, 15),
            "food",
            vec!["alex".into(), "sam".into()],
        )
        .into();

        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"kind\":\"expense\""));

        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back.amount(), t.amount());
        assert_eq!(back.label(), "food");
        assert_eq!(back.participants(), t.participants());
    }

    #[test]
    fn test_display() {
        let e = Expense::new(Money::from_cents(1250), date(2025, 1, 15), "food");
        assert_eq!(format!("{}", e), "2025-01-15 food -$12.50");
    }
}
