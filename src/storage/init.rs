//! Storage initialization
//!
//! Handles first-run setup: directories, settings file and empty data files.

use crate::config::paths::FinwisePaths;
use crate::config::settings::Settings;
use crate::error::FinwiseError;
use crate::models::{Budget, SavingsGoal, Transaction};

use super::data_file::save_records;

/// Initialize storage for a fresh installation
///
/// Existing files are left untouched, so running this twice is harmless.
pub fn initialize_storage(paths: &FinwisePaths) -> Result<(), FinwiseError> {
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
    }

    if !paths.transactions_file().exists() {
        save_records::<Transaction>(&paths.transactions_file(), &[])?;
    }
    if !paths.budgets_file().exists() {
        save_records::<Budget>(&paths.budgets_file(), &[])?;
    }
    if !paths.goals_file().exists() {
        save_records::<SavingsGoal>(&paths.goals_file(), &[])?;
    }

    tracing::info!(path = %paths.base_dir().display(), "Initialized data directory");
    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &FinwisePaths) -> bool {
    !paths.is_initialized()
}
