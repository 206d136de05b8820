//! CSV Export functionality
//!
//! Exports transactions to a spreadsheet-compatible CSV file.

use std::io::Write;

use crate::error::{FinwiseError, FinwiseResult};
use crate::models::Transaction;
use crate::storage::Storage;

const HEADER: [&str; 7] = [
    "ID",
    "Date",
    "Type",
    "Category",
    "Category Key",
    "Description",
    "Amount",
];

/// Write transactions as CSV, one row per record
pub fn write_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> FinwiseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| FinwiseError::Export(e.to_string()))?;

    for txn in transactions {
        let amount = txn.amount.to_decimal().to_string();
        csv_writer
            .write_record([
                txn.id.as_uuid().to_string().as_str(),
                txn.date.to_string().as_str(),
                txn.kind.to_string().as_str(),
                txn.category.label(),
                txn.category.key(),
                txn.description.as_str(),
                amount.as_str(),
            ])
            .map_err(|e| FinwiseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinwiseError::Export(e.to_string()))?;
    Ok(())
}

/// Export all stored transactions to CSV, newest first
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: W) -> FinwiseResult<()> {
    let transactions = storage.transactions.get_all()?;
    write_transactions_csv(&transactions, writer)?;
    tracing::info!(count = transactions.len(), "Exported transactions to CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionKind};
    use chrono::NaiveDate;

    #[test]
    fn test_csv_quotes_fields_with_commas() {
        let txn = Transaction::with_description(
            TransactionKind::Expense,
            Money::from_cents(123_456),
            Category::Food,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            "Dinner, drinks",
        );

        let mut buffer = Vec::new();
        write_transactions_csv(&[txn.clone()], &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let mut lines = output.lines();
        assert_eq!(
            lines.next().unwrap(),
            "ID,Date,Type,Category,Category Key,Description,Amount"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with(&txn.id.as_uuid().to_string()));
        assert!(row.contains("Food & Dining,food,\"Dinner, drinks\",1234.56"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let mut buffer = Vec::new();
        write_transactions_csv(&[], &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 1);
    }
}
