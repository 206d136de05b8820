//! Savings goal service
//!
//! Provides business logic for savings goals, including contributions.

use chrono::{NaiveDate, Utc};

use crate::error::{FinwiseError, FinwiseResult};
use crate::models::{GoalId, Money, SavingsGoal};
use crate::storage::Storage;

use super::resolve_reference;

/// Service for savings goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new goal
#[derive(Debug, Clone)]
pub struct CreateGoalInput {
    pub title: String,
    pub target_amount: Money,
    pub current_amount: Option<Money>,
    pub target_date: Option<NaiveDate>,
    pub icon: Option<String>,
}

/// Partial update; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateGoalInput {
    pub title: Option<String>,
    pub target_amount: Option<Money>,
    pub current_amount: Option<Money>,
    /// `Some(None)` clears the target date
    pub target_date: Option<Option<NaiveDate>>,
    pub icon: Option<String>,
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new savings goal
    pub fn create(&self, input: CreateGoalInput) -> FinwiseResult<SavingsGoal> {
        let mut goal = SavingsGoal::new(input.title.trim(), input.target_amount);
        if let Some(current) = input.current_amount {
            goal.current_amount = current;
        }
        goal.target_date = input.target_date;
        if let Some(icon) = input.icon.filter(|i| !i.trim().is_empty()) {
            goal.icon = icon.trim().to_string();
        }

        goal.validate()
            .map_err(|e| FinwiseError::Validation(e.to_string()))?;

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        tracing::info!(
            id = %goal.id,
            title = %goal.title,
            target = %goal.target_amount,
            "Created savings goal"
        );
        Ok(goal)
    }

    pub fn get(&self, id: GoalId) -> FinwiseResult<Option<SavingsGoal>> {
        self.storage.goals.get(id)
    }

    /// Find a goal by full id or short prefix
    pub fn find(&self, identifier: &str) -> FinwiseResult<Option<SavingsGoal>> {
        if let Ok(id) = identifier.parse::<GoalId>() {
            return self.storage.goals.get(id);
        }

        resolve_reference(
            self.storage.goals.get_all()?,
            identifier,
            "Savings goal",
            |g, r| g.id.matches_short(r),
        )
    }

    /// Like [`find`](Self::find), but a missing goal is an error
    pub fn resolve(&self, identifier: &str) -> FinwiseResult<SavingsGoal> {
        self.find(identifier)?
            .ok_or_else(|| FinwiseError::goal_not_found(identifier))
    }

    /// All goals in creation order
    pub fn list(&self) -> FinwiseResult<Vec<SavingsGoal>> {
        self.storage.goals.get_all()
    }

    /// Update a goal
    pub fn update(&self, id: GoalId, input: UpdateGoalInput) -> FinwiseResult<SavingsGoal> {
        let mut goal = self
            .storage
            .goals
            .get(id)?
            .ok_or_else(|| FinwiseError::goal_not_found(id.to_string()))?;

        if let Some(title) = input.title {
            goal.title = title.trim().to_string();
        }
        if let Some(target) = input.target_amount {
            goal.target_amount = target;
        }
        if let Some(current) = input.current_amount {
            goal.current_amount = current;
        }
        if let Some(target_date) = input.target_date {
            goal.target_date = target_date;
        }
        if let Some(icon) = input.icon {
            goal.icon = icon.trim().to_string();
        }
        goal.updated_at = Utc::now();

        goal.validate()
            .map_err(|e| FinwiseError::Validation(e.to_string()))?;

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        tracing::info!(id = %goal.id, "Updated savings goal");
        Ok(goal)
    }

    /// Add to a goal's saved amount; a negative amount withdraws
    pub fn contribute(&self, id: GoalId, amount: Money) -> FinwiseResult<SavingsGoal> {
        if amount.is_zero() {
            return Err(FinwiseError::Validation(
                "Contribution amount cannot be zero".into(),
            ));
        }
        if amount.exceeds_record_limit() {
            return Err(FinwiseError::Validation(format!(
                "Contribution {} exceeds the maximum of {}",
                amount,
                Money::RECORD_LIMIT
            )));
        }

        let mut goal = self
            .storage
            .goals
            .get(id)?
            .ok_or_else(|| FinwiseError::goal_not_found(id.to_string()))?;

        let was_complete = goal.is_complete();
        goal.contribute(amount);
        goal.validate()
            .map_err(|e| FinwiseError::Validation(e.to_string()))?;

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        tracing::info!(
            id = %goal.id,
            %amount,
            current = %goal.current_amount,
            "Recorded contribution"
        );
        if goal.is_complete() && !was_complete {
            tracing::info!(id = %goal.id, title = %goal.title, "Savings goal reached");
        }
        Ok(goal)
    }

    /// Delete a goal
    pub fn delete(&self, id: GoalId) -> FinwiseResult<SavingsGoal> {
        let goal = self
            .storage
            .goals
            .get(id)?
            .ok_or_else(|| FinwiseError::goal_not_found(id.to_string()))?;

        self.storage.goals.delete(id)?;
        self.storage.goals.save()?;

        tracing::info!(id = %id, "Deleted savings goal");
        Ok(goal)
    }
}
