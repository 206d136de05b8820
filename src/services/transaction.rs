//! Transaction service
//!
//! Provides business logic for recording, editing and deleting income and
//! expense records.

use chrono::{NaiveDate, Utc};

use crate::error::{FinwiseError, FinwiseResult};
use crate::models::{BudgetMonth, Category, Money, Transaction, TransactionId, TransactionKind};
use crate::storage::Storage;

use super::resolve_reference;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
    pub category: Option<Category>,
    pub month: Option<BudgetMonth>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn month(mut self, month: BudgetMonth) -> Self {
        self.month = Some(month);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionKind,
    pub amount: Money,
    pub category: Category,
    pub date: NaiveDate,
    pub description: Option<String>,
}

/// Partial update; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    pub kind: Option<TransactionKind>,
    pub amount: Option<Money>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> FinwiseResult<Transaction> {
        let mut txn = Transaction::new(input.kind, input.amount, input.category, input.date);
        if let Some(description) = input.description {
            txn.description = description.trim().to_string();
        }

        txn.validate()
            .map_err(|e| FinwiseError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        tracing::info!(
            id = %txn.id,
            kind = %txn.kind,
            amount = %txn.amount,
            "Created transaction"
        );
        Ok(txn)
    }

    pub fn get(&self, id: TransactionId) -> FinwiseResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Find a transaction by full id or short prefix
    pub fn find(&self, identifier: &str) -> FinwiseResult<Option<Transaction>> {
        if let Ok(id) = identifier.parse::<TransactionId>() {
            return self.storage.transactions.get(id);
        }

        resolve_reference(
            self.storage.transactions.get_all()?,
            identifier,
            "Transaction",
            |t, r| t.id.matches_short(r),
        )
    }

    /// Like [`find`](Self::find), but a missing transaction is an error
    pub fn resolve(&self, identifier: &str) -> FinwiseResult<Transaction> {
        self.find(identifier)?
            .ok_or_else(|| FinwiseError::transaction_not_found(identifier))
    }

    /// List transactions, newest first
    pub fn list(&self, filter: TransactionFilter) -> FinwiseResult<Vec<Transaction>> {
        let mut transactions = match filter.month {
            Some(month) => self.storage.transactions.get_for_month(&month)?,
            None => self.storage.transactions.get_all()?,
        };

        if let Some(kind) = filter.kind {
            transactions.retain(|t| t.kind == kind);
        }
        if let Some(category) = filter.category {
            transactions.retain(|t| t.category == category);
        }
        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// Update a transaction
    pub fn update(
        &self,
        id: TransactionId,
        input: UpdateTransactionInput,
    ) -> FinwiseResult<Transaction> {
        let mut txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FinwiseError::transaction_not_found(id.to_string()))?;

        if let Some(kind) = input.kind {
            txn.kind = kind;
        }
        if let Some(amount) = input.amount {
            txn.amount = amount;
        }
        if let Some(category) = input.category {
            txn.category = category;
        }
        if let Some(date) = input.date {
            txn.date = date;
        }
        if let Some(description) = input.description {
            txn.description = description.trim().to_string();
        }
        txn.updated_at = Utc::now();

        txn.validate()
            .map_err(|e| FinwiseError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        tracing::info!(id = %txn.id, "Updated transaction");
        Ok(txn)
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> FinwiseResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FinwiseError::transaction_not_found(id.to_string()))?;

        self.storage.transactions.delete(id)?;
        self.storage.transactions.save()?;

        tracing::info!(id = %id, "Deleted transaction");
        Ok(txn)
    }
}
