//! Savings Goals Report
//!
//! Progress for each goal plus portfolio totals.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::FinwiseResult;
use crate::models::{Money, SavingsGoal};
use crate::storage::Storage;

use super::summary::percent_of;

/// A goal with its computed progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalProgress {
    pub goal: SavingsGoal,
    /// Percent of target saved; may exceed 100
    pub progress: Decimal,
    pub remaining: Money,
    pub is_complete: bool,
    /// Days until the target date, negative when overdue
    pub days_left: Option<i64>,
}

impl GoalProgress {
    pub fn new(goal: SavingsGoal, today: NaiveDate) -> Self {
        Self {
            progress: goal.progress(),
            remaining: goal.remaining(),
            is_complete: goal.is_complete(),
            days_left: goal.days_left(today),
            goal,
        }
    }

    /// Progress capped at 100 for bars
    pub fn bar_progress(&self) -> Decimal {
        self.progress.min(Decimal::ONE_HUNDRED)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalsReport {
    pub goals: Vec<GoalProgress>,
    pub total_saved: Money,
    pub total_target: Money,
    pub overall_progress: Decimal,
    pub completed: usize,
}

impl GoalsReport {
    pub fn compute(goals: Vec<SavingsGoal>, today: NaiveDate) -> Self {
        let total_saved: Money = goals.iter().map(|g| g.current_amount).sum();
        let total_target: Money = goals.iter().map(|g| g.target_amount).sum();

        let goals: Vec<GoalProgress> = goals
            .into_iter()
            .map(|g| GoalProgress::new(g, today))
            .collect();
        let completed = goals.iter().filter(|g| g.is_complete).count();

        Self {
            goals,
            total_saved,
            total_target,
            overall_progress: percent_of(total_saved, total_target),
            completed,
        }
    }

    pub fn generate(storage: &Storage, today: NaiveDate) -> FinwiseResult<Self> {
        Ok(Self::compute(storage.goals.get_all()?, today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn goal(title: &str, target: i64, current: i64) -> SavingsGoal {
        let mut goal = SavingsGoal::new(title, Money::from_cents(target));
        goal.current_amount = Money::from_cents(current);
        goal
    }

    #[test]
    fn test_totals() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let report = GoalsReport::compute(
            vec![
                goal("Emergency", 100_000, 50_000),
                goal("Laptop", 50_000, 75_000),
                goal("Trip", 50_000, 0),
            ],
            today,
        );

        assert_eq!(report.total_saved, Money::from_cents(125_000));
        assert_eq!(report.total_target, Money::from_cents(200_000));
        assert_eq!(report.overall_progress, dec!(62.5));
        assert_eq!(report.completed, 1);

        let laptop = &report.goals[1];
        assert_eq!(laptop.progress, dec!(150));
        assert_eq!(laptop.bar_progress(), dec!(100));
        assert_eq!(laptop.remaining, Money::zero());
    }

    #[test]
    fn test_empty() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let report = GoalsReport::compute(Vec::new(), today);
        assert_eq!(report.overall_progress, Decimal::ZERO);
        assert_eq!(report.completed, 0);
    }
}
