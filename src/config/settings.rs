//! User settings for expense-tracker
//!
//! Startup preferences only. Recorded expenses are never written here.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::display::DEFAULT_DATE_FORMAT;
use crate::error::ExpenseError;
use crate::models::ValidationError;
use crate::storage::DEFAULT_BUDGET;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Budget the session starts with
    #[serde(default = "default_budget")]
    pub monthly_budget: f64,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format (strftime) for chart labels and the exit summary
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Default log filter when `EXPENSE_TRACKER_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_budget() -> f64 {
    DEFAULT_BUDGET
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            monthly_budget: default_budget(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject a budget the store would refuse and unusable date formats
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if !self.monthly_budget.is_finite() || self.monthly_budget <= 0.0 {
            return Err(ValidationError::InvalidBudget(self.monthly_budget).into());
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ExpenseError::Config(format!(
                "Invalid date_format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.monthly_budget, 5000.0);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(Settings::load_or_create(&paths).unwrap(), Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            monthly_budget: 1800.0,
            currency_symbol: "€".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.monthly_budget, 1800.0);
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"monthly_budget": 250}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.monthly_budget, 250.0);
        assert_eq!(loaded.date_format, "%Y-%m-%d %H:%M");
    }

    #[test]
    fn test_invalid_budget_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"monthly_budget": -1}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(ExpenseError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_date_specifier_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(ref msg) if msg.contains("%Q")));
    }

    #[test]
    fn test_custom_date_format_accepted() {
        let settings = Settings {
            date_format: "%d %b %H:%M".into(),
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
    }
}
