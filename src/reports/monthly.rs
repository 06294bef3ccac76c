//! Monthly Summary
//!
//! Total spent per calendar month. Rows whose stored date cannot be parsed
//! are collected under a single `unknown` bucket so the months still add up
//! to the overall total.

use std::collections::BTreeMap;
use std::fmt;

use super::chart::{Chart, ChartKind};
use super::dataset::ExpenseDataset;
use crate::models::{Money, YearMonth};

/// Grouping key for the monthly summary
///
/// Orders chronologically, with `Unknown` after every real month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MonthKey {
    Month(YearMonth),
    Unknown,
}

impl MonthKey {
    pub fn month(&self) -> Option<YearMonth> {
        match self {
            Self::Month(month) => Some(*month),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month(month) => write!(f, "{}", month),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Total for one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTotal {
    pub month: MonthKey,
    pub total: Money,
    pub count: usize,
}

/// Monthly Summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummary {
    /// Chronological rows
    pub rows: Vec<MonthTotal>,
    /// Sum over every row
    pub total: Money,
}

impl MonthlySummary {
    /// Group the dataset by year-month
    pub fn generate(dataset: &ExpenseDataset) -> Self {
        let mut groups: BTreeMap<MonthKey, (Money, usize)> = BTreeMap::new();
        for expense in dataset.expenses() {
            let key = expense
                .date
                .map(|date| MonthKey::Month(YearMonth::from_date(date)))
                .unwrap_or(MonthKey::Unknown);
            let entry = groups.entry(key).or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        let rows: Vec<MonthTotal> = groups
            .into_iter()
            .map(|(month, (total, count))| MonthTotal {
                month,
                total,
                count,
            })
            .collect();
        let total = rows.iter().map(|row| row.total).sum();

        Self { rows, total }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total for a month, if present
    pub fn get(&self, month: YearMonth) -> Option<Money> {
        self.rows
            .iter()
            .find(|row| row.month == MonthKey::Month(month))
            .map(|row| row.total)
    }

    /// Line chart of monthly totals
    ///
    /// Only real months are plotted; the `unknown` bucket has no place on a
    /// time axis.
    pub fn to_chart(&self, currency_symbol: &str) -> Chart {
        let mut chart = Chart::new(
            "Month-wise Expenses",
            "Month",
            format!("Total Amount ({})", currency_symbol),
            ChartKind::Line,
        );
        for row in &self.rows {
            if let MonthKey::Month(month) = row.month {
                chart.push(month.to_string(), row.total);
            }
        }
        chart
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Monthly Summary\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!("{:<24} {:>14} {:>8}\n", "Month", "Amount", "Count"));
        output.push_str(&"-".repeat(50));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<24} {:>14} {:>8}\n",
                row.month.to_string(),
                row.total.format_with_symbol(currency_symbol),
                row.count
            ));
        }

        output.push_str(&"-".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "TOTAL",
            self.total.format_with_symbol(currency_symbol)
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseRow;
    use crate::reports::tests::{row, sample_dataset};

    #[test]
    fn test_generate_monthly_summary() {
        let summary = MonthlySummary::generate(&sample_dataset());

        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.get(YearMonth::new(2024, 1)), Some(Money::from_cents(15000)));
        assert_eq!(summary.get(YearMonth::new(2024, 2)), Some(Money::from_cents(20000)));
        assert_eq!(summary.total, Money::from_cents(35000));
    }

    #[test]
    fn test_rows_are_chronological() {
        let rows: Vec<ExpenseRow> = vec![
            row("2024-03-01", "a", "5"),
            row("2023-12-31", "a", "1"),
            row("not a date", "a", "2"),
            row("2024-01-15", "a", "3"),
        ];
        let summary = MonthlySummary::generate(&ExpenseDataset::from_rows(&rows));

        let keys: Vec<String> = summary.rows.iter().map(|r| r.month.to_string()).collect();
        assert_eq!(keys, ["2023-12", "2024-01", "2024-03", "unknown"]);
        assert_eq!(summary.total, Money::from_cents(1100));
    }

    #[test]
    fn test_chart_skips_unknown_month() {
        let rows = vec![row("2024-01-05", "a", "5"), row("??", "a", "7")];
        let summary = MonthlySummary::generate(&ExpenseDataset::from_rows(&rows));

        let chart = summary.to_chart("$");
        assert_eq!(chart.kind, ChartKind::Line);
        assert_eq!(chart.points.len(), 1);
        assert_eq!(chart.points[0].label, "2024-01");
    }
}
