//! Core data models for the expense tracker
//!
//! - `Money`: cents-based amount with strict and lossy parsing
//! - `Expense` and friends: the single record type in its input, stored and
//!   normalized shapes
//! - `YearMonth`: calendar month key for monthly grouping

pub mod expense;
pub mod money;
pub mod month;

pub use expense::{
    parse_date, parse_date_lossy, Expense, ExpenseDraft, ExpenseRow, NormalizedExpense,
    CSV_HEADER, DATE_FORMAT,
};
pub use money::{Money, MoneyParseError};
pub use month::YearMonth;
