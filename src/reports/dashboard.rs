//! Dashboard
//!
//! Everything the overview screen shows: the month's summary, recent
//! activity, the first few goals and a short daily trend.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::config::settings::{Settings, MAX_TREND_DAYS};
use crate::error::FinwiseResult;
use crate::models::{BudgetMonth, Money, SavingsGoal, Transaction, TransactionKind};
use crate::storage::transactions::sort_newest_first;
use crate::storage::Storage;

use super::goals::GoalProgress;
use super::summary::MonthlySummary;

/// Income and expense for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTrend {
    pub date: NaiveDate,
    pub income: Money,
    pub expense: Money,
    pub net: Money,
}

/// How much the dashboard shows
#[derive(Debug, Clone, Copy)]
pub struct DashboardOptions {
    pub recent: usize,
    pub goals: usize,
    pub trend_days: u32,
    /// Last day of the trend
    pub today: NaiveDate,
}

impl DashboardOptions {
    pub fn from_settings(settings: &Settings, today: NaiveDate) -> Self {
        Self {
            recent: settings.recent_transactions,
            goals: settings.dashboard_goals,
            trend_days: settings.trend_days,
            today,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub summary: MonthlySummary,
    /// Saved across every goal, not just the ones shown
    pub total_savings: Money,
    pub recent: Vec<Transaction>,
    pub goals: Vec<GoalProgress>,
    /// Oldest day first
    pub trend: Vec<DailyTrend>,
}

impl Dashboard {
    pub fn build(
        transactions: &[Transaction],
        goals: &[SavingsGoal],
        month: BudgetMonth,
        options: DashboardOptions,
    ) -> Self {
        let summary = MonthlySummary::from_transactions(transactions, month);

        let mut recent = transactions.to_vec();
        sort_newest_first(&mut recent);
        recent.truncate(options.recent);

        Self {
            summary,
            total_savings: goals.iter().map(|g| g.current_amount).sum(),
            recent,
            goals: goals
                .iter()
                .take(options.goals)
                .cloned()
                .map(|g| GoalProgress::new(g, options.today))
                .collect(),
            trend: daily_trend(transactions, options.today, options.trend_days),
        }
    }

    pub fn generate(
        storage: &Storage,
        month: BudgetMonth,
        options: DashboardOptions,
    ) -> FinwiseResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let goals = storage.goals.get_all()?;
        Ok(Self::build(&transactions, &goals, month, options))
    }
}

/// One entry per day for the `days` days ending at `end`, oldest first
///
/// The window is capped at [`MAX_TREND_DAYS`] and stops at the earliest
/// representable date.
pub fn daily_trend(
    transactions: &[Transaction],
    end: NaiveDate,
    days: u32,
) -> Vec<DailyTrend> {
    (0..u64::from(days.min(MAX_TREND_DAYS)))
        .rev()
        .filter_map(|offset| end.checked_sub_days(Days::new(offset)))
        .map(|date| {
            let mut income = Money::zero();
            let mut expense = Money::zero();
            for txn in transactions.iter().filter(|t| t.date == date) {
                match txn.kind {
                    TransactionKind::Income => income += txn.amount,
                    TransactionKind::Expense => expense += txn.amount,
                }
            }
            DailyTrend {
                date,
                income,
                expense,
                net: income - expense,
            }
        })
        .collect()
}
