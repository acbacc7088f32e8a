//! User settings for the expense dashboard
//!
//! Display preferences and input defaults, stored as config.json.

use serde::{Deserialize, Serialize};

use super::paths::DashboardPaths;
use crate::error::ExpenseError;
use crate::models::Category;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for the expense table (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Category preselected when adding an expense
    #[serde(default)]
    pub default_category: Category,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%b %-d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_category: Category::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &DashboardPaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not saved here; the caller decides when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DashboardPaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
