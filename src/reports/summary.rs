//! Monthly Summary
//!
//! Income, expense, net and savings rate for one month, with expenses broken
//! down by category.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::FinwiseResult;
use crate::models::{BudgetMonth, Category, Money, Transaction, TransactionKind};
use crate::storage::Storage;

/// Expense total for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySpending {
    pub category: Category,
    pub total: Money,
    pub count: usize,
    /// Share of the month's total expense, in percent
    pub share: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    pub month: BudgetMonth,
    pub total_income: Money,
    pub total_expense: Money,
    /// Income minus expense; may be negative
    pub net: Money,
    /// Net as a percentage of income, zero when there is no income
    pub savings_rate: Decimal,
    pub income_count: usize,
    pub expense_count: usize,
    /// Largest spending first
    pub categories: Vec<CategorySpending>,
}

impl MonthlySummary {
    /// Summarize the records dated within `month`; others are ignored
    pub fn from_transactions(transactions: &[Transaction], month: BudgetMonth) -> Self {
        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();
        let mut income_count = 0;
        let mut expense_count = 0;
        let mut by_category: HashMap<Category, (Money, usize)> = HashMap::new();

        for txn in transactions.iter().filter(|t| t.is_in_month(&month)) {
            match txn.kind {
                TransactionKind::Income => {
                    total_income += txn.amount;
                    income_count += 1;
                }
                TransactionKind::Expense => {
                    total_expense += txn.amount;
                    expense_count += 1;
                    let entry = by_category
                        .entry(txn.category)
                        .or_insert((Money::zero(), 0));
                    entry.0 += txn.amount;
                    entry.1 += 1;
                }
            }
        }

        let net = total_income - total_expense;

        let mut categories: Vec<CategorySpending> = by_category
            .into_iter()
            .map(|(category, (total, count))| CategorySpending {
                category,
                total,
                count,
                share: percent_of(total, total_expense),
            })
            .collect();
        categories.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));

        Self {
            month,
            total_income,
            total_expense,
            net,
            savings_rate: percent_of(net, total_income),
            income_count,
            expense_count,
            categories,
        }
    }

    /// Summarize a month from storage
    pub fn generate(storage: &Storage, month: BudgetMonth) -> FinwiseResult<Self> {
        let transactions = storage.transactions.get_for_month(&month)?;
        let summary = Self::from_transactions(&transactions, month);
        tracing::debug!(
            %month,
            income = %summary.total_income,
            expense = %summary.total_expense,
            "Generated monthly summary"
        );
        Ok(summary)
    }

    /// Spending for one category, if any
    pub fn spending_for(&self, category: Category) -> Option<&CategorySpending> {
        self.categories.iter().find(|c| c.category == category)
    }
}

/// `part / whole * 100`, or zero when `whole` is zero
pub(crate) fn percent_of(part: Money, whole: Money) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.to_decimal() / whole.to_decimal() * Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn txn(
        kind: TransactionKind,
        cents: i64,
        category: Category,
        month: u32,
        day: u32,
    ) -> Transaction {
        Transaction::new(
            kind,
            Money::from_cents(cents),
            category,
            NaiveDate::from_ymd_opt(2025, month, day).unwrap(),
        )
    }

    fn jan() -> BudgetMonth {
        BudgetMonth::new(2025, 1).unwrap()
    }

    #[test]
    fn test_totals_and_savings_rate() {
        let transactions = vec![
            txn(TransactionKind::Income, 300_000, Category::Salary, 1, 1),
            txn(TransactionKind::Income, 50_000, Category::Freelance, 1, 15),
            txn(TransactionKind::Expense, 120_000, Category::Housing, 1, 2),
            txn(TransactionKind::Expense, 30_000, Category::Food, 1, 9),
            txn(TransactionKind::Expense, 20_000, Category::Food, 1, 20),
            // other months are ignored
            txn(TransactionKind::Expense, 99_999, Category::Food, 2, 1),
            txn(TransactionKind::Income, 99_999, Category::Salary, 12, 31),
        ];

        let summary = MonthlySummary::from_transactions(&transactions, jan());
        assert_eq!(summary.total_income, Money::from_cents(350_000));
        assert_eq!(summary.total_expense, Money::from_cents(170_000));
        assert_eq!(summary.net, Money::from_cents(180_000));
        assert_eq!(summary.income_count, 2);
        assert_eq!(summary.expense_count, 3);
        assert_eq!(summary.savings_rate.round_dp(2), dec!(51.43));
    }

    #[test]
    fn test_category_breakdown_sums_to_total_expense() {
        let transactions = vec![
            txn(TransactionKind::Expense, 120_000, Category::Housing, 1, 2),
            txn(TransactionKind::Expense, 30_000, Category::Food, 1, 9),
            txn(TransactionKind::Expense, 20_000, Category::Food, 1, 20),
            txn(TransactionKind::Expense, 30_000, Category::Utilities, 1, 21),
        ];

        let summary = MonthlySummary::from_transactions(&transactions, jan());
        let sum: Money = summary.categories.iter().map(|c| c.total).sum();
        assert_eq!(sum, summary.total_expense);

        assert_eq!(summary.categories[0].category, Category::Housing);
        assert_eq!(summary.categories[0].share, dec!(60));

        let food = summary.spending_for(Category::Food).unwrap();
        assert_eq!(food.total, Money::from_cents(50_000));
        assert_eq!(food.count, 2);
        assert!(summary.spending_for(Category::Shopping).is_none());
    }

    #[test]
    fn test_no_income_means_zero_rate() {
        let transactions = vec![txn(TransactionKind::Expense, 5_000, Category::Food, 1, 3)];
        let summary = MonthlySummary::from_transactions(&transactions, jan());
        assert_eq!(summary.net, Money::from_cents(-5_000));
        assert_eq!(summary.savings_rate, Decimal::ZERO);
    }

    #[test]
    fn test_empty_month() {
        let summary = MonthlySummary::from_transactions(&[], jan());
        assert_eq!(summary.total_income, Money::zero());
        assert_eq!(summary.total_expense, Money::zero());
        assert!(summary.categories.is_empty());
    }
}
