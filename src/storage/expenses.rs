//! Expense store backed by a flat CSV file
//!
//! The file is append-only: rows are never rewritten, reordered or removed.

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;
use crate::models::{Expense, ExpenseDraft, ExpenseRow, CSV_HEADER};

use super::file_io::{append_csv_row, ensure_csv_file, read_csv_rows};

/// Append-only store of expense rows
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
    default_category: String,
    default_description: String,
}

impl ExpenseStore {
    /// Create a store for the given backing file with the stock defaults
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            default_category: "other".to_string(),
            default_description: "No description".to_string(),
        }
    }

    /// Override the values stored for a blank category or description
    pub fn with_defaults(
        mut self,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.default_category = category.into();
        self.default_description = description.into();
        self
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the directory and the file with its header if missing
    pub fn ensure_ready(&self) -> Result<(), ExpenseError> {
        ensure_csv_file(&self.path, &CSV_HEADER)
    }

    /// Validate a draft and append it
    ///
    /// A bad date or amount returns a validation error and nothing is written.
    pub fn append(&self, draft: &ExpenseDraft) -> Result<Expense, ExpenseError> {
        let expense = draft.validate(&self.default_category, &self.default_description)?;
        self.append_expense(&expense)?;
        Ok(expense)
    }

    /// Append an already validated expense
    pub fn append_expense(&self, expense: &Expense) -> Result<(), ExpenseError> {
        self.ensure_ready()?;
        let row = expense.to_row();
        append_csv_row(&self.path, &row.fields())
    }

    /// List stored rows in file order (oldest first)
    ///
    /// With `limit`, only the last `limit` rows are returned.
    pub fn list(&self, limit: Option<usize>) -> Result<Vec<ExpenseRow>, ExpenseError> {
        self.ensure_ready()?;
        let mut rows = self.load_rows()?.unwrap_or_default();

        if let Some(limit) = limit {
            let skip = rows.len().saturating_sub(limit);
            rows.drain(..skip);
        }

        Ok(rows)
    }

    /// Read all rows without creating anything
    ///
    /// Returns `None` when the backing file doesn't exist.
    pub fn load_rows(&self) -> Result<Option<Vec<ExpenseRow>>, ExpenseError> {
        let records = read_csv_rows(&self.path)?;
        Ok(records.map(|records| records.iter().map(ExpenseRow::from_record).collect()))
    }

    /// Number of stored rows (zero if the file is missing)
    pub fn count(&self) -> Result<usize, ExpenseError> {
        Ok(self.load_rows()?.map(|rows| rows.len()).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("data").join("expenses.csv"));
        (temp_dir, store)
    }

    fn seed(store: &ExpenseStore) {
        for (date, category, amount) in [
            ("2024-01-05", "food", "100"),
            ("2024-01-20", "food", "50"),
            ("2024-02-01", "travel", "200"),
        ] {
            store
                .append(&ExpenseDraft::new(date, category, "", amount))
                .unwrap();
        }
    }

    #[test]
    fn test_ensure_ready_writes_header_once() {
        let (_temp_dir, store) = create_test_store();

        store.ensure_ready().unwrap();
        store.ensure_ready().unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "date,category,description,amount\n");
    }

    #[test]
    fn test_append_then_list_returns_last() {
        let (_temp_dir, store) = create_test_store();
        seed(&store);

        store
            .append(&ExpenseDraft::new("2024-03-03", "", "", "9.99"))
            .unwrap();

        let rows = store.list(None).unwrap();
        assert_eq!(rows.len(), 4);
        let last = rows.last().unwrap();
        assert_eq!(last.date, "2024-03-03");
        assert_eq!(last.category, "other");
        assert_eq!(last.description, "No description");
        assert_eq!(last.amount, "9.99");
    }

    #[test]
    fn test_invalid_input_writes_nothing() {
        let (_temp_dir, store) = create_test_store();
        seed(&store);

        let bad_date = store.append(&ExpenseDraft::new("2024-02-30", "food", "", "10"));
        let bad_amount = store.append(&ExpenseDraft::new("2024-02-03", "food", "", "lots"));

        assert!(bad_date.unwrap_err().is_validation());
        assert!(bad_amount.unwrap_err().is_validation());
        assert_eq!(store.count().unwrap(), 3);
    }

    #[test]
    fn test_list_limit() {
        let (_temp_dir, store) = create_test_store();
        seed(&store);

        let rows = store.list(Some(1)).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "travel");

        let rows = store.list(Some(10)).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].date, "2024-01-05");

        assert!(store.list(Some(0)).unwrap().is_empty());
        assert_eq!(store.count().unwrap(), 3);
    }

    #[test]
    fn test_list_creates_missing_file() {
        let (_temp_dir, store) = create_test_store();

        assert!(store.list(None).unwrap().is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn test_load_rows_missing_file() {
        let (_temp_dir, store) = create_test_store();

        assert!(store.load_rows().unwrap().is_none());
        assert_eq!(store.count().unwrap(), 0);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_custom_defaults() {
        let (_temp_dir, store) = create_test_store();
        let store = store.with_defaults("misc", "-");

        let expense = store
            .append(&ExpenseDraft::new("2024-01-01", " ", "", "1"))
            .unwrap();
        assert_eq!(expense.category, "misc");
        assert_eq!(expense.description, "-");
    }

    #[test]
    fn test_description_with_comma_round_trips() {
        let (_temp_dir, store) = create_test_store();

        store
            .append(&ExpenseDraft::new("2024-01-01", "food", "tea, \"biscuits\"", "1"))
            .unwrap();

        let rows = store.list(None).unwrap();
        assert_eq!(rows[0].description, "tea, \"biscuits\"");
    }
}
