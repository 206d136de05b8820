//! YAML Export functionality
//!
//! Exports the full snapshot as human-readable YAML.

use std::io::Write;

use crate::error::{FinwiseError, FinwiseResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the full snapshot to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> FinwiseResult<()> {
    let export = FullExport::from_storage(storage)?;

    writeln!(writer, "# finwise data export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| FinwiseError::Export(e.to_string()))?;

    serde_yaml::to_writer(&mut *writer, &export)
        .map_err(|e| FinwiseError::Export(e.to_string()))?;

    tracing::info!(
        transactions = export.metadata.transaction_count,
        "Exported YAML snapshot"
    );
    Ok(())
}

/// Parse a YAML snapshot and check it
pub fn parse_yaml_export(yaml_str: &str) -> FinwiseResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| FinwiseError::Export(e.to_string()))?;

    export.validate().map_err(FinwiseError::Validation)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinwisePaths;
    use crate::models::{Budget, BudgetMonth, Category, Money};
    use tempfile::TempDir;

    #[test]
    fn test_yaml_export_parses_back() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinwisePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage
            .budgets
            .upsert(Budget::new(
                Category::Housing,
                Money::from_cents(150_000),
                BudgetMonth::new(2025, 3).unwrap(),
            ))
            .unwrap();

        let mut buffer = Vec::new();
        export_full_yaml(&storage, &mut buffer).unwrap();
        let yaml = String::from_utf8(buffer).unwrap();

        assert!(yaml.starts_with("# finwise data export"));
        assert!(yaml.contains("2025-03"));
        assert!(yaml.contains("category: housing"));

        let parsed = parse_yaml_export(&yaml).unwrap();
        assert_eq!(parsed.budgets.len(), 1);
        assert_eq!(parsed.budgets[0].monthly_limit, Money::from_cents(150_000));
    }
}
