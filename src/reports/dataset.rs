//! Loaded expense dataset
//!
//! Every aggregate is computed from a single in-memory pass over the
//! normalized rows of the backing file.

use crate::error::ExpenseResult;
use crate::models::{ExpenseRow, Money, NormalizedExpense};
use crate::storage::ExpenseStore;

/// What was found when loading the backing file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetStatus {
    /// The backing file does not exist yet
    Missing,
    /// The file exists but holds no data rows
    Empty,
    /// At least one data row was loaded
    Loaded,
}

/// Normalized expense rows ready for aggregation
#[derive(Debug, Clone)]
pub struct ExpenseDataset {
    status: DatasetStatus,
    expenses: Vec<NormalizedExpense>,
}

impl ExpenseDataset {
    /// Load from the store without creating anything on disk
    pub fn load(store: &ExpenseStore) -> ExpenseResult<Self> {
        Ok(match store.load_rows()? {
            None => Self::missing(),
            Some(rows) => Self::from_rows(&rows),
        })
    }

    /// Dataset for a backing file that does not exist
    pub fn missing() -> Self {
        Self {
            status: DatasetStatus::Missing,
            expenses: Vec::new(),
        }
    }

    /// Normalize stored rows
    pub fn from_rows(rows: &[ExpenseRow]) -> Self {
        let expenses: Vec<_> = rows.iter().map(ExpenseRow::normalize).collect();
        let status = if expenses.is_empty() {
            DatasetStatus::Empty
        } else {
            DatasetStatus::Loaded
        };
        Self { status, expenses }
    }

    pub fn status(&self) -> DatasetStatus {
        self.status
    }

    /// Informational message for a dataset with nothing to aggregate
    pub fn status_message(&self) -> Option<&'static str> {
        match self.status {
            DatasetStatus::Missing => Some("No expenses found. Add some expenses first."),
            DatasetStatus::Empty => Some("File is empty."),
            DatasetStatus::Loaded => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn expenses(&self) -> &[NormalizedExpense] {
        &self.expenses
    }

    /// Sum of every amount, unparsable ones counting as zero
    pub fn total(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }
}
