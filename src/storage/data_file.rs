//! Record files
//!
//! Every data file is a JSON object holding one list of records under a fixed
//! key, e.g. `{"transactions": [...]}`. Records are checked as they load, so a
//! hand-edited file cannot carry an amount the services would refuse.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// A record kept in its own data file
pub trait StoredRecord: Serialize + DeserializeOwned {
    /// Key of the record list inside the file
    const FILE_KEY: &'static str;

    /// Full identifier, used for duplicate detection and error messages
    fn record_id(&self) -> String;

    /// Reject a record the services would never have written
    fn check(&self) -> Result<(), String>;
}

/// Why a data file could not be loaded or saved
#[derive(Debug, Error)]
pub enum DataFileError {
    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid JSON (line {line}, column {column}): {message}", .path.display())]
    Corrupt {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("{} should hold a \"{key}\" list", .path.display())]
    WrongShape { path: PathBuf, key: &'static str },

    #[error("Record #{index} in {} is malformed: {message}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        index: usize,
        message: String,
    },

    #[error("Record {id} in {} is invalid: {reason}", .path.display())]
    InvalidRecord {
        path: PathBuf,
        id: String,
        reason: String,
    },

    #[error("Record {id} appears more than once in {}", .path.display())]
    DuplicateRecord { path: PathBuf, id: String },

    #[error("Cannot encode records for {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DataFileError {
    /// The file the error is about
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. }
            | Self::Corrupt { path, .. }
            | Self::WrongShape { path, .. }
            | Self::MalformedRecord { path, .. }
            | Self::InvalidRecord { path, .. }
            | Self::DuplicateRecord { path, .. }
            | Self::Encode { path, .. }
            | Self::Write { path, .. } => path,
        }
    }
}

/// Load every record from `path`
///
/// A missing file, or a file without the record key, holds no records.
pub fn load_records<T: StoredRecord>(path: &Path) -> Result<Vec<T>, DataFileError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(DataFileError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let root: Value = serde_json::from_str(&content).map_err(|e| DataFileError::Corrupt {
        path: path.to_path_buf(),
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    })?;

    let wrong_shape = || DataFileError::WrongShape {
        path: path.to_path_buf(),
        key: T::FILE_KEY,
    };
    let items = match root {
        Value::Object(mut map) => match map.remove(T::FILE_KEY) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(wrong_shape()),
        },
        _ => return Err(wrong_shape()),
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let record: T =
            serde_json::from_value(item).map_err(|e| DataFileError::MalformedRecord {
                path: path.to_path_buf(),
                index,
                message: e.to_string(),
            })?;

        let id = record.record_id();
        if let Err(reason) = record.check() {
            return Err(DataFileError::InvalidRecord {
                path: path.to_path_buf(),
                id,
                reason,
            });
        }
        if !seen.insert(id.clone()) {
            return Err(DataFileError::DuplicateRecord {
                path: path.to_path_buf(),
                id,
            });
        }
        records.push(record);
    }

    tracing::debug!(path = %path.display(), count = records.len(), "Loaded records");
    Ok(records)
}

/// Replace the contents of `path` with `records`
///
/// The file is written to a sibling temp file first and renamed into place,
/// so a failed save leaves the previous contents intact.
pub fn save_records<T: StoredRecord>(path: &Path, records: &[T]) -> Result<(), DataFileError> {
    let encode_err = |source: serde_json::Error| DataFileError::Encode {
        path: path.to_path_buf(),
        source,
    };
    let write_err = |source: io::Error| DataFileError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut root = Map::new();
    root.insert(
        T::FILE_KEY.to_string(),
        serde_json::to_value(records).map_err(encode_err)?,
    );

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    // same directory, or the rename is not atomic
    let temp_path = path.with_extension("json.tmp");
    let result = File::create(&temp_path)
        .map_err(write_err)
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &Value::Object(root))
                .map_err(encode_err)?;
            writer.flush().map_err(write_err)?;
            writer.get_ref().sync_all().map_err(write_err)
        })
        .and_then(|()| fs::rename(&temp_path, path).map_err(write_err));

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result?;

    tracing::debug!(path = %path.display(), count = records.len(), "Saved records");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, SavingsGoal, Transaction, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn lunch() -> Transaction {
        Transaction::new(
            TransactionKind::Expense,
            Money::from_cents(1_250),
            Category::Food,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_missing_file_holds_no_records() {
        let temp_dir = TempDir::new().unwrap();
        let records: Vec<Transaction> =
            load_records(&temp_dir.path().join("transactions.json")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("transactions.json");
        let txn = lunch();

        save_records(&path, std::slice::from_ref(&txn)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["transactions"].as_array().map(Vec::len), Some(1));
        assert!(!path.with_extension("json.tmp").exists());

        let loaded: Vec<Transaction> = load_records(&path).unwrap();
        assert_eq!(loaded, vec![txn]);
    }

    #[test]
    fn test_corrupt_file_reports_position() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("goals.json");
        fs::write(&path, "{\n  \"goals\": [\n    oops\n  ]\n}").unwrap();

        let err = load_records::<SavingsGoal>(&path).unwrap_err();
        match &err {
            DataFileError::Corrupt { line, .. } => assert_eq!(*line, 3),
            other => panic!("expected a corrupt file error, got {other:?}"),
        }
        assert_eq!(err.path(), path.as_path());
        assert!(err.to_string().contains("goals.json"));
    }

    #[test]
    fn test_wrong_shape() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("goals.json");

        fs::write(&path, r#"{"goals": {"title": "Car"}}"#).unwrap();
        assert!(matches!(
            load_records::<SavingsGoal>(&path),
            Err(DataFileError::WrongShape { key: "goals", .. })
        ));

        fs::write(&path, "[]").unwrap();
        assert!(matches!(
            load_records::<SavingsGoal>(&path),
            Err(DataFileError::WrongShape { .. })
        ));

        fs::write(&path, r#"{"goals": null}"#).unwrap();
        assert!(load_records::<SavingsGoal>(&path).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_record_names_its_position() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let good = serde_json::to_value(lunch()).unwrap();
        let body = serde_json::json!({ "transactions": [good, { "amount": "lots" }] });
        fs::write(&path, body.to_string()).unwrap();

        assert!(matches!(
            load_records::<Transaction>(&path),
            Err(DataFileError::MalformedRecord { index: 1, .. })
        ));
    }

    #[test]
    fn test_oversized_amount_is_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let mut txn = lunch();
        txn.amount = Money::from_cents(i64::MAX);
        let body = serde_json::json!({ "transactions": [&txn, &txn] });
        fs::write(&path, body.to_string()).unwrap();

        match load_records::<Transaction>(&path).unwrap_err() {
            DataFileError::InvalidRecord { id, .. } => assert_eq!(id, txn.record_id()),
            other => panic!("expected an invalid record error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let txn = lunch();
        let body = serde_json::json!({ "transactions": [&txn, &txn] });
        fs::write(&path, body.to_string()).unwrap();

        assert!(matches!(
            load_records::<Transaction>(&path),
            Err(DataFileError::DuplicateRecord { .. })
        ));
    }
}
