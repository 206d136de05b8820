//! Budget Status Report
//!
//! Compares each budget of a month with what was actually spent in its
//! category.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;

use crate::error::FinwiseResult;
use crate::models::{Budget, BudgetId, BudgetMonth, Category, Money, Transaction};
use crate::storage::Storage;

use super::summary::percent_of;

/// Percentage at which a budget starts warning
pub const WARNING_THRESHOLD: Decimal = dec!(80);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetState {
    Normal,
    Warning,
    OverBudget,
}

impl BudgetState {
    /// Classify spending against a limit
    ///
    /// Over budget only when spending strictly exceeds the limit; spending
    /// exactly the limit is normal.
    pub fn classify(spent: Money, limit: Money, percentage: Decimal) -> Self {
        if spent > limit {
            Self::OverBudget
        } else if percentage >= WARNING_THRESHOLD && percentage < Decimal::ONE_HUNDRED {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

impl fmt::Display for BudgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Normal => "On track",
            Self::Warning => "Warning",
            Self::OverBudget => "Over budget",
        };
        f.pad(s)
    }
}

/// One budget compared with spending
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetStatusRow {
    pub budget_id: BudgetId,
    pub category: Category,
    pub limit: Money,
    pub spent: Money,
    /// Limit minus spent; negative when over
    pub remaining: Money,
    pub percentage: Decimal,
    pub state: BudgetState,
}

impl BudgetStatusRow {
    pub fn is_over_budget(&self) -> bool {
        self.state == BudgetState::OverBudget
    }

    pub fn is_warning(&self) -> bool {
        self.state == BudgetState::Warning
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetStatusReport {
    pub month: BudgetMonth,
    pub rows: Vec<BudgetStatusRow>,
    pub total_limit: Money,
    pub total_spent: Money,
    pub total_remaining: Money,
    /// Zero when nothing is budgeted
    pub total_percentage: Decimal,
    /// Expense categories without a budget this month
    pub available_categories: Vec<Category>,
}

impl BudgetStatusReport {
    /// Compare the month's budgets with the month's expense records
    ///
    /// Budgets and transactions from other months are ignored.
    pub fn compute(
        budgets: &[Budget],
        transactions: &[Transaction],
        month: BudgetMonth,
    ) -> Self {
        let month_expenses: Vec<&Transaction> = transactions
            .iter()
            .filter(|t| t.is_expense() && t.is_in_month(&month))
            .collect();

        let mut month_budgets: Vec<&Budget> =
            budgets.iter().filter(|b| b.month == month).collect();
        month_budgets.sort_by_key(|b| b.category);

        let rows: Vec<BudgetStatusRow> = month_budgets
            .iter()
            .map(|budget| {
                let spent: Money = month_expenses
                    .iter()
                    .filter(|t| t.category == budget.category)
                    .map(|t| t.amount)
                    .sum();
                let percentage = percent_of(spent, budget.monthly_limit);
                BudgetStatusRow {
                    budget_id: budget.id,
                    category: budget.category,
                    limit: budget.monthly_limit,
                    spent,
                    remaining: budget.monthly_limit - spent,
                    percentage,
                    state: BudgetState::classify(spent, budget.monthly_limit, percentage),
                }
            })
            .collect();

        let total_limit: Money = rows.iter().map(|r| r.limit).sum();
        let total_spent: Money = rows.iter().map(|r| r.spent).sum();

        let available_categories = Category::expense()
            .filter(|c| !month_budgets.iter().any(|b| b.category == *c))
            .collect();

        Self {
            month,
            rows,
            total_limit,
            total_spent,
            total_remaining: total_limit - total_spent,
            total_percentage: percent_of(total_spent, total_limit),
            available_categories,
        }
    }

    /// Build the report for a month from storage
    pub fn generate(storage: &Storage, month: BudgetMonth) -> FinwiseResult<Self> {
        let budgets = storage.budgets.get_for_month(&month)?;
        let transactions = storage.transactions.get_for_month(&month)?;
        let report = Self::compute(&budgets, &transactions, month);

        for row in report.rows.iter().filter(|r| r.is_over_budget()) {
            tracing::warn!(
                category = row.category.key(),
                %month,
                spent = %row.spent,
                limit = %row.limit,
                "Budget exceeded"
            );
        }

        Ok(report)
    }

    pub fn over_budget(&self) -> impl Iterator<Item = &BudgetStatusRow> {
        self.rows.iter().filter(|r| r.is_over_budget())
    }
}
