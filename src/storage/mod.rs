//! Storage layer for finwise
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod budget;
pub mod data_file;
pub mod goals;
pub mod init;
pub mod transactions;

pub use budget::BudgetRepository;
pub use data_file::{DataFileError, StoredRecord};
pub use goals::GoalRepository;
pub use init::initialize_storage;
pub use transactions::TransactionRepository;

use crate::config::paths::FinwisePaths;
use crate::error::FinwiseError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinwisePaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
    pub goals: GoalRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FinwisePaths) -> Result<Self, FinwiseError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            goals: GoalRepository::new(paths.goals_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinwisePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FinwiseError> {
        self.transactions.load()?;
        self.budgets.load()?;
        self.goals.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FinwiseError> {
        self.transactions.save()?;
        self.budgets.save()?;
        self.goals.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, SavingsGoal};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinwisePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_save_all_and_load_all() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinwisePaths::with_base_dir(temp_dir.path().to_path_buf());

        let storage = Storage::new(paths.clone()).unwrap();
        storage
            .goals
            .upsert(SavingsGoal::new("House", Money::from_cents(1_000_000)))
            .unwrap();
        storage.save_all().unwrap();

        let mut reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();
        assert_eq!(reopened.goals.get_all().unwrap().len(), 1);
        assert_eq!(reopened.transactions.count().unwrap(), 0);
    }
}
