//! Display formatting for terminal output
//!
//! Provides utilities for formatting records, history and charts for
//! terminal display.

pub mod chart;
pub mod expense;

pub use chart::{format_bar, format_chart, AsciiChartPresenter};
pub use expense::{format_expense_table, format_history};
