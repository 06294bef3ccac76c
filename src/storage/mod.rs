//! Storage layer for the expense tracker
//!
//! A single flat CSV file holds every expense. This module owns creating it,
//! appending to it and reading it back.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseStore;
pub use file_io::{append_csv_row, ensure_csv_file, read_csv_rows};

use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::error::ExpenseError;

/// Main storage coordinator
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseStore,
}

impl Storage {
    /// Create a new Storage instance
    ///
    /// Nothing is written until an operation needs the backing file.
    pub fn new(paths: ExpensePaths, settings: &Settings) -> Self {
        let expenses = ExpenseStore::new(paths.expenses_file())
            .with_defaults(&settings.default_category, &settings.default_description);

        Self { paths, expenses }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Create the base directory and the backing file
    pub fn initialize(&self) -> Result<(), ExpenseError> {
        self.paths.ensure_directories()?;
        self.expenses.ensure_ready()
    }
}
