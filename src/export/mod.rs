//! Export module for finwise
//!
//! - CSV: transactions only (spreadsheet-compatible)
//! - JSON: full machine-readable snapshot
//! - YAML: full human-readable snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_full_yaml;
