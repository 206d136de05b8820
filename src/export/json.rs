//! JSON Export functionality
//!
//! Exports every record to JSON with schema versioning.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FinwiseError, FinwiseResult};
use crate::models::{Budget, SavingsGoal, Transaction};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full snapshot of the data directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Application version that created the export
    pub app_version: String,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<SavingsGoal>,
    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub budget_count: usize,
    pub goal_count: usize,
    pub earliest_transaction: Option<String>,
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Snapshot the given records
    pub fn new(
        transactions: Vec<Transaction>,
        budgets: Vec<Budget>,
        goals: Vec<SavingsGoal>,
    ) -> Self {
        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            budget_count: budgets.len(),
            goal_count: goals.len(),
            earliest_transaction: transactions
                .iter()
                .map(|t| t.date)
                .min()
                .map(|d| d.to_string()),
            latest_transaction: transactions
                .iter()
                .map(|t| t.date)
                .max()
                .map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            budgets,
            goals,
            metadata,
        }
    }

    /// Snapshot everything in storage
    pub fn from_storage(storage: &Storage) -> FinwiseResult<Self> {
        Ok(Self::new(
            storage.transactions.get_all()?,
            storage.budgets.get_all()?,
            storage.goals.get_all()?,
        ))
    }

    /// Check the snapshot is internally consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        for txn in &self.transactions {
            txn.validate()
                .map_err(|e| format!("Transaction {}: {}", txn.id, e))?;
        }

        let mut seen = HashSet::new();
        for budget in &self.budgets {
            budget
                .validate()
                .map_err(|e| format!("Budget {}: {}", budget.id, e))?;
            if !seen.insert((budget.category, budget.month)) {
                return Err(format!(
                    "Duplicate budget for {} in {}",
                    budget.category.key(),
                    budget.month
                ));
            }
        }

        for goal in &self.goals {
            goal.validate()
                .map_err(|e| format!("Goal {}: {}", goal.id, e))?;
        }

        Ok(())
    }
}

/// Export the full snapshot as pretty JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W) -> FinwiseResult<()> {
    let export = FullExport::from_storage(storage)?;

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| FinwiseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinwiseError::Export(e.to_string()))?;

    tracing::info!(
        transactions = export.metadata.transaction_count,
        budgets = export.metadata.budget_count,
        goals = export.metadata.goal_count,
        "Exported JSON snapshot"
    );
    Ok(())
}
