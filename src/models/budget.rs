//! Budget limit model
//!
//! A monthly spending limit for one expense category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::BudgetId;
use super::money::Money;
use super::period::BudgetMonth;

/// A spending limit for a category in a specific month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// The expense category being limited
    pub category: Category,

    /// Maximum planned spending for the month
    pub monthly_limit: Money,

    /// The month this limit applies to
    pub month: BudgetMonth,

    /// When this budget was created
    pub created_at: DateTime<Utc>,

    /// When this budget was last modified
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget
    pub fn new(category: Category, monthly_limit: Money, month: BudgetMonth) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            category,
            monthly_limit,
            month,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the limit
    pub fn set_limit(&mut self, amount: Money) {
        self.monthly_limit = amount;
        self.updated_at = Utc::now();
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.category.is_expense() {
            return Err(BudgetValidationError::IncomeCategory(self.category));
        }

        if !self.monthly_limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit(self.monthly_limit));
        }

        if self.monthly_limit.exceeds_record_limit() {
            return Err(BudgetValidationError::LimitTooLarge(self.monthly_limit));
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.month, self.category, self.monthly_limit
        )
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BudgetValidationError {
    #[error("Budgets can only be set on expense categories, '{0}' is an income category")]
    IncomeCategory(Category),

    #[error("Monthly limit must be greater than zero, got {0}")]
    NonPositiveLimit(Money),

    #[error("Monthly limit {0} exceeds the maximum of {max}", max = Money::RECORD_LIMIT)]
    LimitTooLarge(Money),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan() -> BudgetMonth {
        BudgetMonth::new(2025, 1).unwrap()
    }

    #[test]
    fn test_new_budget() {
        let budget = Budget::new(Category::Food, Money::from_cents(50_000), jan());
        assert_eq!(budget.category, Category::Food);
        assert!(budget.validate().is_ok());
        assert_eq!(budget.to_string(), "2025-01 Food & Dining: $500.00");
    }

    #[test]
    fn test_validation() {
        let budget = Budget::new(Category::Salary, Money::from_cents(100), jan());
        assert_eq!(
            budget.validate(),
            Err(BudgetValidationError::IncomeCategory(Category::Salary))
        );

        let mut budget = Budget::new(Category::Housing, Money::from_cents(100), jan());
        budget.set_limit(Money::zero());
        assert!(matches!(
            budget.validate(),
            Err(BudgetValidationError::NonPositiveLimit(_))
        ));

        budget.set_limit(Money::from_cents(i64::MAX));
        assert!(matches!(
            budget.validate(),
            Err(BudgetValidationError::LimitTooLarge(_))
        ));
    }
}
