//! Dashboard statistics

use chrono::NaiveDate;
use std::collections::BTreeSet;

use super::dataset::ExpenseDataset;
use crate::models::{Money, DATE_FORMAT};

/// Shown in place of the last entry date when there is none
pub const NO_DATE_PLACEHOLDER: &str = "—";

/// Headline figures for the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_spent: Money,
    pub record_count: usize,
    pub category_count: usize,
    /// Most recent parsable date
    pub last_entry: Option<NaiveDate>,
}

impl DashboardStats {
    pub fn generate(dataset: &ExpenseDataset) -> Self {
        let expenses = dataset.expenses();
        let categories: BTreeSet<&str> = expenses.iter().map(|e| e.category.as_str()).collect();

        Self {
            total_spent: dataset.total(),
            record_count: expenses.len(),
            category_count: categories.len(),
            last_entry: expenses.iter().filter_map(|e| e.date).max(),
        }
    }

    /// Last entry as `YYYY-MM-DD`, or the placeholder
    pub fn last_entry_label(&self) -> String {
        self.last_entry
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| NO_DATE_PLACEHOLDER.to_string())
    }

    /// Title/value pairs for the stat cards
    pub fn cards(&self, currency_symbol: &str) -> [(&'static str, String); 4] {
        [
            ("Total Spent", self.total_spent.format_with_symbol(currency_symbol)),
            ("Total Records", self.record_count.to_string()),
            ("Categories", self.category_count.to_string()),
            ("Last Entry", self.last_entry_label()),
        ]
    }

    /// Format the stats for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        self.cards(currency_symbol)
            .iter()
            .map(|(title, value)| format!("{:<15} {}\n", format!("{}:", title), value))
            .collect()
    }
}
