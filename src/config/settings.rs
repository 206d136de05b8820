//! User settings for finwise
//!
//! Display preferences and dashboard sizes, stored as `config.json`.

use serde::{Deserialize, Serialize};

use super::paths::FinwisePaths;
use crate::error::FinwiseError;

/// Longest daily trend the dashboard will build
pub const MAX_TREND_DAYS: u32 = 366;

/// User settings for finwise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How many recent transactions the dashboard shows
    #[serde(default = "default_recent_transactions")]
    pub recent_transactions: usize,

    /// How many goals the dashboard shows
    #[serde(default = "default_dashboard_goals")]
    pub dashboard_goals: usize,

    /// Length of the dashboard's daily trend
    #[serde(default = "default_trend_days")]
    pub trend_days: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_recent_transactions() -> usize {
    5
}

fn default_dashboard_goals() -> usize {
    3
}

fn default_trend_days() -> u32 {
    7
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recent_transactions: default_recent_transactions(),
            dashboard_goals: default_dashboard_goals(),
            trend_days: default_trend_days(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinwisePaths) -> Result<Self, FinwiseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinwiseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let mut settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinwiseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if settings.trend_days > MAX_TREND_DAYS {
                tracing::warn!(
                    trend_days = settings.trend_days,
                    max = MAX_TREND_DAYS,
                    "Clamping trend_days from config.json"
                );
                settings.trend_days = MAX_TREND_DAYS;
            }
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinwisePaths) -> Result<(), FinwiseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinwiseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            FinwiseError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Format a date with the configured pattern
    pub fn format_date(&self, date: chrono::NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.recent_transactions, 5);
        assert_eq!(settings.dashboard_goals, 3);
        assert_eq!(settings.trend_days, 7);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinwisePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".into(),
            trend_days: 14,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_oversized_trend_is_clamped_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinwisePaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), r#"{"trend_days":4294967295}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.trend_days, MAX_TREND_DAYS);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"currency_symbol":"£"}"#).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert_eq!(loaded.date_format, "%Y-%m-%d");
        assert_eq!(loaded.recent_transactions, 5);
    }

    #[test]
    fn test_format_date() {
        let settings = Settings {
            date_format: "%d/%m/%Y".into(),
            ..Settings::default()
        };
        let date = chrono::NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(settings.format_date(date), "09/03/2025");
    }
}
