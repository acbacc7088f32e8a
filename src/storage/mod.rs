//! Storage layer for the expense dashboard
//!
//! Provides the in-memory expense store and its JSON file persistence with
//! atomic writes and automatic directory creation.

pub mod expenses;
pub mod file_io;
pub mod init;

pub use expenses::ExpenseStore;
pub use file_io::{read_json, write_json_atomic};
pub use init::{initialize_storage, seed_expenses};

use crate::config::paths::DashboardPaths;
use crate::error::ExpenseError;

/// Main storage coordinator
///
/// Owns the expense store; callers borrow it for queries and mutate it through
/// [`ExpenseStore::add_expense`].
pub struct Storage {
    paths: DashboardPaths,
    pub expenses: ExpenseStore,
}

impl Storage {
    /// Create a new, empty Storage instance
    pub fn new(paths: DashboardPaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            paths,
            expenses: ExpenseStore::new(),
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &DashboardPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ExpenseError> {
        self.expenses = ExpenseStore::load(&self.paths.expenses_file())?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), ExpenseError> {
        self.expenses.save(&self.paths.expenses_file())
    }

    /// Check if storage has been initialized (has an expense file)
    pub fn is_initialized(&self) -> bool {
        self.paths.expenses_file().exists()
    }
}
