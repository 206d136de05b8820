//! CLI command for data export
//!
//! Writes transactions as CSV or a full snapshot as JSON or YAML.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{FinwiseError, FinwiseResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (transactions only)
    Csv,
    /// JSON format (everything)
    Json,
    /// YAML format (everything, human-readable)
    Yaml,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> FinwiseResult<()> {
    let ExportArgs { output, format } = args;

    let file = File::create(&output).map_err(|e| {
        FinwiseError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            csv::export_transactions_csv(storage, &mut writer)?;
            let count = storage.transactions.count()?;
            println!("Exported {} transactions to: {}", count, output.display());
        }
        ExportFormat::Json => {
            json::export_full_json(storage, &mut writer)?;
            println!("Full snapshot exported to: {}", output.display());
        }
        ExportFormat::Yaml => {
            yaml::export_full_yaml(storage, &mut writer)?;
            println!("Full snapshot exported to: {}", output.display());
        }
    }

    writer
        .flush()
        .map_err(|e| FinwiseError::Export(e.to_string()))?;
    Ok(())
}
