//! Budget repository for JSON storage
//!
//! Manages loading and saving monthly category limits to budgets.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinwiseError;
use crate::models::{Budget, BudgetId, BudgetMonth, Category};

use super::data_file::{load_records, save_records, StoredRecord};

impl StoredRecord for Budget {
    const FILE_KEY: &'static str = "budgets";

    fn record_id(&self) -> String {
        self.id.as_uuid().to_string()
    }

    fn check(&self) -> Result<(), String> {
        self.validate().map_err(|e| e.to_string())
    }
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<HashMap<BudgetId, Budget>>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(HashMap::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), FinwiseError> {
        let loaded: Vec<Budget> = load_records(&self.path)?;

        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| FinwiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        budgets.clear();
        for budget in loaded {
            budgets.insert(budget.id, budget);
        }

        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), FinwiseError> {
        let budgets = self.get_all()?;
        save_records(&self.path, &budgets)?;
        Ok(())
    }

    pub fn get(&self, id: BudgetId) -> Result<Option<Budget>, FinwiseError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| FinwiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.get(&id).cloned())
    }

    /// All budgets ordered by month, then category
    pub fn get_all(&self) -> Result<Vec<Budget>, FinwiseError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| FinwiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = budgets.values().cloned().collect();
        list.sort_by(|a, b| a.month.cmp(&b.month).then(a.category.cmp(&b.category)));
        Ok(list)
    }

    /// Budgets for one month, ordered by category
    pub fn get_for_month(&self, month: &BudgetMonth) -> Result<Vec<Budget>, FinwiseError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|b| &b.month == month)
            .collect())
    }

    /// Find the budget for a category in a month
    pub fn find(
        &self,
        category: Category,
        month: &BudgetMonth,
    ) -> Result<Option<Budget>, FinwiseError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| FinwiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets
            .values()
            .find(|b| b.category == category && &b.month == month)
            .cloned())
    }

    /// Insert or update a budget
    pub fn upsert(&self, budget: Budget) -> Result<(), FinwiseError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| FinwiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        budgets.insert(budget.id, budget);
        Ok(())
    }

    /// Delete a budget, returning whether it existed
    pub fn delete(&self, id: BudgetId) -> Result<bool, FinwiseError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| FinwiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(budgets.remove(&id).is_some())
    }
}
