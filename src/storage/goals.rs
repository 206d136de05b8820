//! Savings goal repository for JSON storage
//!
//! Manages loading and saving goals to goals.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinwiseError;
use crate::models::{GoalId, SavingsGoal};

use super::data_file::{load_records, save_records, StoredRecord};

impl StoredRecord for SavingsGoal {
    const FILE_KEY: &'static str = "goals";

    fn record_id(&self) -> String {
        self.id.as_uuid().to_string()
    }

    fn check(&self) -> Result<(), String> {
        self.validate().map_err(|e| e.to_string())
    }
}

/// Repository for savings goal persistence
pub struct GoalRepository {
    path: PathBuf,
    goals: RwLock<HashMap<GoalId, SavingsGoal>>,
}

impl GoalRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            goals: RwLock::new(HashMap::new()),
        }
    }

    /// Load goals from disk
    pub fn load(&self) -> Result<(), FinwiseError> {
        let loaded: Vec<SavingsGoal> = load_records(&self.path)?;

        let mut goals = self
            .goals
            .write()
            .map_err(|e| FinwiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        goals.clear();
        for goal in loaded {
            goals.insert(goal.id, goal);
        }

        Ok(())
    }

    /// Save goals to disk
    pub fn save(&self) -> Result<(), FinwiseError> {
        let goals = self.get_all()?;
        save_records(&self.path, &goals)?;
        Ok(())
    }

    pub fn get(&self, id: GoalId) -> Result<Option<SavingsGoal>, FinwiseError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| FinwiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(goals.get(&id).cloned())
    }

    /// All goals in creation order
    pub fn get_all(&self) -> Result<Vec<SavingsGoal>, FinwiseError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| FinwiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = goals.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(list)
    }

    /// Insert or update a goal
    pub fn upsert(&self, goal: SavingsGoal) -> Result<(), FinwiseError> {
        let mut goals = self
            .goals
            .write()
            .map_err(|e| FinwiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        goals.insert(goal.id, goal);
        Ok(())
    }

    /// Delete a goal, returning whether it existed
    pub fn delete(&self, id: GoalId) -> Result<bool, FinwiseError> {
        let mut goals = self
            .goals
            .write()
            .map_err(|e| FinwiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(goals.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_creation_order_survives_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("goals.json");
        let repo = GoalRepository::new(path.clone());

        let first = SavingsGoal::new("Emergency fund", Money::from_cents(100_000));
        let mut second = SavingsGoal::new("Vacation", Money::from_cents(20_000));
        second.created_at = first.created_at + chrono::Duration::seconds(1);

        repo.upsert(second.clone()).unwrap();
        repo.upsert(first.clone()).unwrap();
        repo.save().unwrap();

        let repo2 = GoalRepository::new(path);
        repo2.load().unwrap();
        let titles: Vec<_> = repo2
            .get_all()
            .unwrap()
            .into_iter()
            .map(|g| g.title)
            .collect();
        assert_eq!(titles, vec!["Emergency fund", "Vacation"]);
    }

    #[test]
    fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let repo = GoalRepository::new(temp_dir.path().join("goals.json"));
        let goal = SavingsGoal::new("Car", Money::from_cents(500_000));
        let id = goal.id;

        repo.upsert(goal).unwrap();
        assert!(repo.delete(id).unwrap());
        assert!(repo.get(id).unwrap().is_none());
    }
}
