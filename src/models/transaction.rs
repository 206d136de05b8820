//! Transaction model
//!
//! A transaction is a dated, categorized income or expense record. The amount
//! is always non-negative; direction comes from the kind.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;
use super::period::BudgetMonth;

/// Whether a record brings money in or sends it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => f.pad("Income"),
            Self::Expense => f.pad("Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = TransactionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(TransactionValidationError::UnknownKind(other.to_string())),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    pub kind: TransactionKind,

    /// Amount (never negative)
    pub amount: Money,

    /// Category from the fixed catalog
    pub category: Category,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Transaction date
    pub date: NaiveDate,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            category,
            description: String::new(),
            date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a transaction with a description
    pub fn with_description(
        kind: TransactionKind,
        amount: Money,
        category: Category,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        let mut txn = Self::new(kind, amount, category, date);
        txn.description = description.into();
        txn
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Check if this transaction falls in the given month
    pub fn is_in_month(&self, month: &BudgetMonth) -> bool {
        month.contains(self.date)
    }

    /// Amount with sign applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        if self.amount.exceeds_record_limit() {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }

        if self.category.kind() != self.kind {
            return Err(TransactionValidationError::CategoryKindMismatch {
                category: self.category,
                kind: self.kind,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date, self.kind, self.amount, self.category
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionValidationError {
    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(Money),

    #[error("Amount {0} exceeds the maximum of {max}", max = Money::RECORD_LIMIT)]
    AmountTooLarge(Money),

    #[error("Category '{category}' cannot be used for {kind} records")]
    CategoryKindMismatch {
        category: Category,
        kind: TransactionKind,
    },

    #[error("Unknown transaction type '{0}' (expected income or expense)")]
    UnknownKind(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            TransactionKind::Expense,
            Money::from_cents(4250),
            Category::Food,
            test_date(),
        );

        assert!(txn.is_expense());
        assert_eq!(txn.signed_amount(), Money::from_cents(-4250));
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_month_membership() {
        let txn = Transaction::new(
            TransactionKind::Income,
            Money::from_cents(100),
            Category::Salary,
            test_date(),
        );
        assert!(txn.is_in_month(&BudgetMonth::new(2025, 1).unwrap()));
        assert!(!txn.is_in_month(&BudgetMonth::new(2025, 2).unwrap()));
    }

    #[test]
    fn test_validation_rejects_zero_and_negative() {
        let mut txn = Transaction::new(
            TransactionKind::Expense,
            Money::zero(),
            Category::Food,
            test_date(),
        );
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::NonPositiveAmount(_))
        ));

        txn.amount = Money::from_cents(-100);
        assert!(txn.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_amount_over_limit() {
        let mut txn = Transaction::new(
            TransactionKind::Income,
            Money::parse("50000000000000000").unwrap(),
            Category::Salary,
            test_date(),
        );
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::AmountTooLarge(_))
        ));

        txn.amount = Money::RECORD_LIMIT;
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_category_mismatch() {
        let txn = Transaction::new(
            TransactionKind::Income,
            Money::from_cents(100),
            Category::Housing,
            test_date(),
        );
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::CategoryKindMismatch {
                category: Category::Housing,
                kind: TransactionKind::Income,
            })
        );
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("Expense".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::with_description(
            TransactionKind::Expense,
            Money::from_cents(1999),
            Category::Entertainment,
            test_date(),
            "Concert",
        );
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"kind\":\"expense\""));
        assert!(json.contains("\"category\":\"entertainment\""));

        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, txn);
    }
}
