//! User settings for finman
//!
//! Manages display preferences, the months selector bound, and whether adding
//! an expense also re-records the current income.

use serde::{Deserialize, Serialize};

use super::paths::FinmanPaths;
use crate::error::FinmanError;

/// User settings for finman
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to summary amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Months used by `project` when none is given
    #[serde(default = "default_months")]
    pub default_months: u32,

    /// Largest months value accepted by `project`
    #[serde(default = "default_max_months")]
    pub max_months: u32,

    /// Append the latest income again whenever an expense is added
    #[serde(default)]
    pub record_income_on_expense: bool,

    /// Log filter used when `FINMAN_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Newest settings layout this build understands
pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SETTINGS_SCHEMA_VERSION
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_months() -> u32 {
    1
}

fn default_max_months() -> u32 {
    12
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_months: default_months(),
            max_months: default_max_months(),
            record_income_on_expense: false,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinmanPaths) -> Result<Self, FinmanError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FinmanError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinmanError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if settings.schema_version > SETTINGS_SCHEMA_VERSION {
                return Err(FinmanError::Config(format!(
                    "Settings file version {} is newer than supported version {}",
                    settings.schema_version, SETTINGS_SCHEMA_VERSION
                )));
            }

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinmanPaths) -> Result<(), FinmanError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinmanError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| FinmanError::Io(format!("Failed to write settings file: {}", e)))?;

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
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.default_months, 1);
        assert_eq!(settings.max_months, 12);
        assert!(!settings.record_income_on_expense);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinmanPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".into();
        settings.record_income_on_expense = true;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert!(loaded.record_income_on_expense);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"max_months": 24}"#).unwrap();
        assert_eq!(loaded.max_months, 24);
        assert_eq!(loaded.default_months, 1);
        assert_eq!(loaded.log_level, "warn");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinmanPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FinmanError::Config(_)));
    }

    #[test]
    fn test_newer_schema_version_is_refused() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinmanPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"schema_version": 99}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FinmanError::Config(_)));
    }
}
