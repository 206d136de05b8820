//! Savings goal model
//!
//! A goal tracks progress toward a target amount, optionally by a date.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// Icon used when none is given
pub const DEFAULT_GOAL_ICON: &str = "piggy-bank";

/// Maximum title length
pub const MAX_TITLE_LEN: usize = 255;

fn default_icon() -> String {
    DEFAULT_GOAL_ICON.to_string()
}

/// A savings goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: GoalId,

    pub title: String,

    /// Amount to reach
    pub target_amount: Money,

    /// Amount saved so far
    #[serde(default)]
    pub current_amount: Money,

    /// Optional deadline
    #[serde(default)]
    pub target_date: Option<NaiveDate>,

    /// Icon name for display
    #[serde(default = "default_icon")]
    pub icon: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl SavingsGoal {
    /// Create a new goal with nothing saved yet
    pub fn new(title: impl Into<String>, target_amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: GoalId::new(),
            title: title.into(),
            target_amount,
            current_amount: Money::zero(),
            target_date: None,
            icon: default_icon(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Progress as a percentage of the target; not capped at 100
    pub fn progress(&self) -> Decimal {
        if self.target_amount.is_zero() {
            return Decimal::ZERO;
        }
        self.current_amount.to_decimal() / self.target_amount.to_decimal() * Decimal::ONE_HUNDRED
    }

    pub fn is_complete(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Amount still needed, never negative
    pub fn remaining(&self) -> Money {
        let remaining = self.target_amount - self.current_amount;
        if remaining.is_negative() {
            Money::zero()
        } else {
            remaining
        }
    }

    /// Days until the target date, negative when overdue
    pub fn days_left(&self, today: NaiveDate) -> Option<i64> {
        self.target_date.map(|d| (d - today).num_days())
    }

    /// Add (or withdraw, when negative) from the saved amount, never below zero
    pub fn contribute(&mut self, amount: Money) {
        let updated =
            Money::from_cents(self.current_amount.cents().saturating_add(amount.cents()));
        self.current_amount = if updated.is_negative() {
            Money::zero()
        } else {
            updated
        };
        self.updated_at = Utc::now();
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(GoalValidationError::EmptyTitle);
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(GoalValidationError::TitleTooLong(title.chars().count()));
        }
        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }
        if self.target_amount.exceeds_record_limit() {
            return Err(GoalValidationError::TargetTooLarge(self.target_amount));
        }
        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrent(self.current_amount));
        }
        if self.current_amount.exceeds_record_limit() {
            return Err(GoalValidationError::CurrentTooLarge(self.current_amount));
        }
        Ok(())
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {}",
            self.title, self.current_amount, self.target_amount
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GoalValidationError {
    #[error("Goal title cannot be empty")]
    EmptyTitle,

    #[error("Goal title too long ({0} characters, max 255)")]
    TitleTooLong(usize),

    #[error("Target amount must be greater than zero, got {0}")]
    NonPositiveTarget(Money),

    #[error("Current amount cannot be negative, got {0}")]
    NegativeCurrent(Money),

    #[error("Target amount {0} exceeds the maximum of {max}", max = Money::RECORD_LIMIT)]
    TargetTooLarge(Money),

    #[error("Current amount {0} exceeds the maximum of {max}", max = Money::RECORD_LIMIT)]
    CurrentTooLarge(Money),
}
