//! Budget service
//!
//! Provides business logic for monthly category limits. At most one budget
//! exists per (category, month).

use chrono::Utc;

use crate::error::{FinwiseError, FinwiseResult};
use crate::models::{Budget, BudgetId, BudgetMonth, Category, Money};
use crate::storage::Storage;

use super::resolve_reference;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

/// Partial update; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateBudgetInput {
    pub category: Option<Category>,
    pub monthly_limit: Option<Money>,
    pub month: Option<BudgetMonth>,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a budget for a category in a month
    pub fn create(
        &self,
        category: Category,
        monthly_limit: Money,
        month: BudgetMonth,
    ) -> FinwiseResult<Budget> {
        let budget = Budget::new(category, monthly_limit, month);
        budget
            .validate()
            .map_err(|e| FinwiseError::Validation(e.to_string()))?;

        self.ensure_unique(category, &month, None)?;

        self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;

        tracing::info!(
            id = %budget.id,
            category = category.key(),
            %month,
            limit = %monthly_limit,
            "Created budget"
        );
        Ok(budget)
    }

    pub fn get(&self, id: BudgetId) -> FinwiseResult<Option<Budget>> {
        self.storage.budgets.get(id)
    }

    /// Find a budget by full id or short prefix
    pub fn find(&self, identifier: &str) -> FinwiseResult<Option<Budget>> {
        if let Ok(id) = identifier.parse::<BudgetId>() {
            return self.storage.budgets.get(id);
        }

        resolve_reference(
            self.storage.budgets.get_all()?,
            identifier,
            "Budget",
            |b, r| b.id.matches_short(r),
        )
    }

    /// Like [`find`](Self::find), but a missing budget is an error
    pub fn resolve(&self, identifier: &str) -> FinwiseResult<Budget> {
        self.find(identifier)?
            .ok_or_else(|| FinwiseError::budget_not_found(identifier))
    }

    /// Budgets for a month, ordered by category
    pub fn list_for_month(&self, month: &BudgetMonth) -> FinwiseResult<Vec<Budget>> {
        self.storage.budgets.get_for_month(month)
    }

    /// All budgets, ordered by month then category
    pub fn list(&self) -> FinwiseResult<Vec<Budget>> {
        self.storage.budgets.get_all()
    }

    /// Update a budget
    pub fn update(&self, id: BudgetId, input: UpdateBudgetInput) -> FinwiseResult<Budget> {
        let mut budget = self
            .storage
            .budgets
            .get(id)?
            .ok_or_else(|| FinwiseError::budget_not_found(id.to_string()))?;

        if let Some(category) = input.category {
            budget.category = category;
        }
        if let Some(limit) = input.monthly_limit {
            budget.monthly_limit = limit;
        }
        if let Some(month) = input.month {
            budget.month = month;
        }
        budget.updated_at = Utc::now();

        budget
            .validate()
            .map_err(|e| FinwiseError::Validation(e.to_string()))?;
        self.ensure_unique(budget.category, &budget.month, Some(id))?;

        self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;

        tracing::info!(id = %budget.id, "Updated budget");
        Ok(budget)
    }

    /// Delete a budget
    pub fn delete(&self, id: BudgetId) -> FinwiseResult<Budget> {
        let budget = self
            .storage
            .budgets
            .get(id)?
            .ok_or_else(|| FinwiseError::budget_not_found(id.to_string()))?;

        self.storage.budgets.delete(id)?;
        self.storage.budgets.save()?;

        tracing::info!(id = %id, "Deleted budget");
        Ok(budget)
    }

    fn ensure_unique(
        &self,
        category: Category,
        month: &BudgetMonth,
        exclude: Option<BudgetId>,
    ) -> FinwiseResult<()> {
        match self.storage.budgets.find(category, month)? {
            Some(existing) if Some(existing.id) != exclude => Err(FinwiseError::Duplicate {
                entity_type: "Budget",
                identifier: format!("{} {}", category.key(), month),
            }),
            _ => Ok(()),
        }
    }
}
