//! Path management for the expense dashboard
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_DASHBOARD_DATA_DIR` environment variable (if set)
//! 2. The platform config directory, via `directories`
//!    (e.g. `~/.config/expense-dashboard` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ExpenseError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_DASHBOARD_DATA_DIR";

/// Manages all paths used by the expense dashboard
#[derive(Debug, Clone)]
pub struct DashboardPaths {
    base_dir: PathBuf,
}

impl DashboardPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the platform config directory
    /// cannot be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "expense-dashboard")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    ExpenseError::Config("Could not determine a config directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths under a custom base directory (useful for testing)
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

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ExpenseError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DashboardPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.expenses_file(),
            temp_dir.path().join("data").join("expenses.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DashboardPaths::with_base_dir(temp_dir.path().join("fresh"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }
}
