//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinwiseError;
use crate::models::{BudgetMonth, Transaction, TransactionId};

use super::data_file::{load_records, save_records, StoredRecord};

impl StoredRecord for Transaction {
    const FILE_KEY: &'static str = "transactions";

    fn record_id(&self) -> String {
        self.id.as_uuid().to_string()
    }

    fn check(&self) -> Result<(), String> {
        self.validate().map_err(|e| e.to_string())
    }
}

/// Newest first: date descending, then creation time descending
pub(crate) fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then(b.created_at.cmp(&a.created_at))
    });
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), FinwiseError> {
        let transactions: Vec<Transaction> = load_records(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            FinwiseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for txn in transactions {
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), FinwiseError> {
        let transactions = self.get_all()?;
        save_records(&self.path, &transactions)?;
        Ok(())
    }

    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, FinwiseError> {
        let data = self.data.read().map_err(|e| {
            FinwiseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// All transactions, newest first
    pub fn get_all(&self) -> Result<Vec<Transaction>, FinwiseError> {
        let data = self.data.read().map_err(|e| {
            FinwiseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    /// Transactions dated within a month, newest first
    pub fn get_for_month(&self, month: &BudgetMonth) -> Result<Vec<Transaction>, FinwiseError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|t| t.is_in_month(month))
            .collect())
    }

    /// Insert or update a transaction
    pub fn upsert(&self, txn: Transaction) -> Result<(), FinwiseError> {
        let mut data = self.data.write().map_err(|e| {
            FinwiseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(txn.id, txn);
        Ok(())
    }

    /// Delete a transaction, returning whether it existed
    pub fn delete(&self, id: TransactionId) -> Result<bool, FinwiseError> {
        let mut data = self.data.write().map_err(|e| {
            FinwiseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data.remove(&id).is_some())
    }

    pub fn count(&self) -> Result<usize, FinwiseError> {
        let data = self.data.read().map_err(|e| {
            FinwiseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        (temp_dir, repo)
    }

    fn expense(day: u32, cents: i64) -> Transaction {
        Transaction::new(
            TransactionKind::Expense,
            Money::from_cents(cents),
            Category::Food,
            NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_get_all_is_newest_first() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(expense(5, 100)).unwrap();
        repo.upsert(expense(20, 200)).unwrap();
        repo.upsert(expense(12, 300)).unwrap();

        let days: Vec<u32> = repo
            .get_all()
            .unwrap()
            .iter()
            .map(|t| chrono::Datelike::day(&t.date))
            .collect();
        assert_eq!(days, vec![20, 12, 5]);
    }

    #[test]
    fn test_same_day_orders_by_creation() {
        let (_temp_dir, repo) = create_test_repo();
        let first = expense(10, 100);
        let mut second = expense(10, 200);
        second.created_at = first.created_at + chrono::Duration::seconds(5);

        repo.upsert(first.clone()).unwrap();
        repo.upsert(second.clone()).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let txn = expense(15, 5000);
        let id = txn.id;

        repo.upsert(txn).unwrap();
        repo.save().unwrap();

        let repo2 = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        assert_eq!(repo2.get(id).unwrap().unwrap().amount.cents(), 5000);
    }

    #[test]
    fn test_load_refuses_hand_edited_amount() {
        let (temp_dir, repo) = create_test_repo();
        let path = temp_dir.path().join("transactions.json");
        let mut txn = expense(15, 5000);
        txn.amount = Money::from_cents(i64::MAX);
        let body = serde_json::json!({ "transactions": [&txn] });
        std::fs::write(&path, body.to_string()).unwrap();

        match repo.load().unwrap_err() {
            FinwiseError::DataFile(err) => assert_eq!(err.path(), path.as_path()),
            other => panic!("expected a data file error, got {other:?}"),
        }
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_month_filter_and_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let jan = expense(15, 100);
        let mut feb = expense(15, 200);
        feb.date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();

        repo.upsert(jan.clone()).unwrap();
        repo.upsert(feb).unwrap();

        let month = BudgetMonth::new(2025, 1).unwrap();
        assert_eq!(repo.get_for_month(&month).unwrap().len(), 1);

        assert!(repo.delete(jan.id).unwrap());
        assert!(!repo.delete(jan.id).unwrap());
        assert!(repo.get_for_month(&month).unwrap().is_empty());
    }
}
