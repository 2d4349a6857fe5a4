//! Path management for finman
//!
//! ## Path Resolution Order
//!
//! 1. `FINMAN_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `finman` (via `directories`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinmanError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FINMAN_DATA_DIR";

/// Manages all paths used by finman
#[derive(Debug, Clone)]
pub struct FinmanPaths {
    /// Base directory for all finman data
    base_dir: PathBuf,
}

impl FinmanPaths {
    /// Create a new FinmanPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, FinmanError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FinmanPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the SQLite database holding income and expenses
    pub fn database_file(&self) -> PathBuf {
        self.data_dir().join("finance.db")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FinmanError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinmanError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FinmanError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if finman has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, FinmanError> {
    ProjectDirs::from("", "", "finman")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FinmanError::Config("Could not determine a home directory".into()))
}
