//! Expense record models
//!
//! An expense moves through three shapes:
//!
//! - [`ExpenseDraft`]: the four fields exactly as a user typed them
//! - [`Expense`]: a validated record ready to be appended
//! - [`ExpenseRow`]: one row as it sits in the backing file, unvalidated
//!
//! [`NormalizedExpense`] is what the aggregator works with after lossy coercion
//! of a stored row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Date format used for input, storage and display
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Header row of the backing file, in column order
pub const CSV_HEADER: [&str; 4] = ["date", "category", "description", "amount"];

/// Parse a `YYYY-MM-DD` date strictly, as required when adding an expense
pub fn parse_date(input: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| ExpenseError::invalid_date(input.trim()))
}

/// Parse a stored date, returning `None` instead of failing
///
/// Besides plain `YYYY-MM-DD`, a timestamp whose first ten characters form a
/// date (`2024-01-05 10:30:00`, `2024-01-05T10:30`) is accepted.
pub fn parse_date_lossy(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok().or_else(|| {
        input
            .get(..10)
            .and_then(|prefix| NaiveDate::parse_from_str(prefix, DATE_FORMAT).ok())
    })
}

/// User input for a new expense, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: String,
}

impl ExpenseDraft {
    /// Create a draft from the four raw fields
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            description: description.into(),
            amount: amount.into(),
        }
    }

    /// Fill a blank date with `today`, as the interactive prompts do
    pub fn date_or(mut self, today: NaiveDate) -> Self {
        if self.date.trim().is_empty() {
            self.date = today.format(DATE_FORMAT).to_string();
        }
        self
    }

    /// Validate the draft into an [`Expense`]
    ///
    /// Date and amount must parse. A blank category or description is replaced
    /// by the given defaults.
    pub fn validate(
        &self,
        default_category: &str,
        default_description: &str,
    ) -> ExpenseResult<Expense> {
        let date = parse_date(&self.date)?;
        let amount =
            Money::parse(&self.amount).map_err(|_| ExpenseError::invalid_amount(self.amount.trim()))?;

        Ok(Expense {
            date,
            category: or_default(&self.category, default_category),
            description: or_default(&self.description, default_description),
            amount,
        })
    }
}

fn or_default(value: &str, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// A validated expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub amount: Money,
}

impl Expense {
    /// The row this expense is stored as
    pub fn to_row(&self) -> ExpenseRow {
        ExpenseRow {
            date: self.date.format(DATE_FORMAT).to_string(),
            category: self.category.clone(),
            description: self.description.clone(),
            amount: self.amount.to_string(),
        }
    }
}

/// One data row of the backing file, exactly as stored
///
/// Fields are kept as text: rows written by hand or by older versions may not
/// parse, and listing must still show them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRow {
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: String,
}

impl ExpenseRow {
    /// Build a row from a CSV record, tolerating missing trailing fields
    pub fn from_record(record: &csv::StringRecord) -> Self {
        let field = |i: usize| record.get(i).unwrap_or("").to_string();
        Self {
            date: field(0),
            category: field(1),
            description: field(2),
            amount: field(3),
        }
    }

    /// The row's fields in column order
    pub fn fields(&self) -> [&str; 4] {
        [&self.date, &self.category, &self.description, &self.amount]
    }

    /// Coerce the row for aggregation (never fails)
    pub fn normalize(&self) -> NormalizedExpense {
        NormalizedExpense {
            date: parse_date_lossy(&self.date),
            category: self.category.clone(),
            description: self.description.clone(),
            amount: Money::parse_lossy(&self.amount),
        }
    }
}

/// A stored row after type coercion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedExpense {
    /// `None` when the stored date could not be parsed
    pub date: Option<NaiveDate>,
    pub category: String,
    pub description: String,
    /// Zero when the stored amount could not be parsed
    pub amount: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_validate_draft() {
        let draft = ExpenseDraft::new("2024-01-05", " food ", "lunch", "100");
        let expense = draft.validate("other", "No description").unwrap();

        assert_eq!(expense.date, date(2024, 1, 5));
        assert_eq!(expense.category, "food");
        assert_eq!(expense.description, "lunch");
        assert_eq!(expense.amount, Money::from_cents(10000));
    }

    #[test]
    fn test_validate_substitutes_defaults() {
        let draft = ExpenseDraft::new("2024-01-05", "", "   ", "12.5");
        let expense = draft.validate("other", "No description").unwrap();

        assert_eq!(expense.category, "other");
        assert_eq!(expense.description, "No description");
    }

    #[test]
    fn test_validate_rejects_bad_date() {
        for bad in ["", "05-01-2024", "2024-13-01", "2024/01/05", "yesterday"] {
            let draft = ExpenseDraft::new(bad, "food", "x", "1");
            let err = draft.validate("other", "No description").unwrap_err();
            assert!(err.is_validation(), "{bad:?}");
        }
    }

    #[test]
    fn test_blank_date_defaults_to_today() {
        let today = date(2024, 6, 30);
        let draft = ExpenseDraft::new("  ", "food", "", "1").date_or(today);
        assert_eq!(draft.date, "2024-06-30");

        let draft = ExpenseDraft::new("2024-01-01", "food", "", "1").date_or(today);
        assert_eq!(draft.date, "2024-01-01");
    }

    #[test]
    fn test_validate_rejects_bad_amount() {
        let draft = ExpenseDraft::new("2024-01-05", "food", "x", "ten");
        let err = draft.validate("other", "No description").unwrap_err();
        assert!(err.to_string().contains("Invalid amount"));
    }

    #[test]
    fn test_to_row() {
        let expense = Expense {
            date: date(2024, 2, 1),
            category: "travel".into(),
            description: "train".into(),
            amount: Money::from_cents(20000),
        };
        assert_eq!(expense.to_row().fields(), ["2024-02-01", "travel", "train", "200.00"]);
    }

    #[test]
    fn test_normalize_coerces() {
        let row = ExpenseRow {
            date: "2024-01-05 00:00:00".into(),
            category: "food".into(),
            description: "lunch".into(),
            amount: "abc".into(),
        };
        let normalized = row.normalize();
        assert_eq!(normalized.date, Some(date(2024, 1, 5)));
        assert_eq!(normalized.amount, Money::zero());

        let row = ExpenseRow {
            date: "someday".into(),
            amount: "1.5".into(),
            ..ExpenseRow::default()
        };
        let normalized = row.normalize();
        assert_eq!(normalized.date, None);
        assert_eq!(normalized.amount, Money::from_cents(150));
    }

    #[test]
    fn test_from_short_record() {
        let record = csv::StringRecord::from(vec!["2024-01-05", "food"]);
        let row = ExpenseRow::from_record(&record);
        assert_eq!(row.category, "food");
        assert_eq!(row.description, "");
        assert_eq!(row.amount, "");
    }
}
