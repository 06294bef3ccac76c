//! Reports module for the expense tracker
//!
//! Aggregates the loaded dataset into category and monthly summaries,
//! dashboard figures and chart descriptions.

pub mod category;
pub mod chart;
pub mod dashboard;
pub mod dataset;
pub mod monthly;

pub use category::{CategorySummary, CategoryTotal};
pub use chart::{Chart, ChartKind, ChartPoint, ChartPresenter};
pub use dashboard::{DashboardStats, NO_DATE_PLACEHOLDER};
pub use dataset::{DatasetStatus, ExpenseDataset};
pub use monthly::{MonthKey, MonthTotal, MonthlySummary};

/// Which summary chart to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ChartSelection {
    /// Bar chart of totals per category
    Category,
    /// Line chart of totals per month
    Monthly,
}

impl ChartSelection {
    /// Build the selected chart from a dataset
    pub fn build(self, dataset: &ExpenseDataset, currency_symbol: &str) -> Chart {
        match self {
            Self::Category => CategorySummary::generate(dataset).to_chart(currency_symbol),
            Self::Monthly => MonthlySummary::generate(dataset).to_chart(currency_symbol),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{ExpenseRow, Money};

    pub(crate) fn row(date: &str, category: &str, amount: &str) -> ExpenseRow {
        ExpenseRow {
            date: date.into(),
            category: category.into(),
            description: String::new(),
            amount: amount.into(),
        }
    }

    pub(crate) fn sample_dataset() -> ExpenseDataset {
        ExpenseDataset::from_rows(&[
            row("2024-01-05", "food", "100"),
            row("2024-01-20", "food", "50"),
            row("2024-02-01", "travel", "200"),
        ])
    }

    #[test]
    fn test_grouping_is_a_partition() {
        let rows = vec![
            row("2024-01-05", "food", "100.25"),
            row("garbage", "food", "x"),
            row("2023-11-30", "rent", "-40"),
            row("2024-01-05 09:00", "", "0.75"),
            row("", "travel", "12"),
        ];
        let dataset = ExpenseDataset::from_rows(&rows);
        let raw_total: Money = rows.iter().map(|r| Money::parse_lossy(&r.amount)).sum();

        let by_category: Money = CategorySummary::generate(&dataset)
            .rows
            .iter()
            .map(|r| r.total)
            .sum();
        let by_month: Money = MonthlySummary::generate(&dataset)
            .rows
            .iter()
            .map(|r| r.total)
            .sum();

        assert_eq!(by_category, raw_total);
        assert_eq!(by_month, raw_total);
        assert_eq!(DashboardStats::generate(&dataset).total_spent, raw_total);
    }

    #[test]
    fn test_oversized_amounts_never_break_aggregation() {
        use crate::config::{ExpensePaths, Settings};
        use crate::models::ExpenseDraft;
        use crate::storage::Storage;

        let temp_dir = tempfile::TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default());

        let huge = ExpenseDraft::new("2024-01-05", "food", "", "90000000000000000");
        assert!(storage.expenses.append(&huge).unwrap_err().is_validation());
        storage
            .expenses
            .append(&ExpenseDraft::new("2024-01-05", "food", "", "1000000000000"))
            .unwrap();
        assert_eq!(storage.expenses.count().unwrap(), 1);

        // Rows edited in by hand can still carry anything.
        let dataset = ExpenseDataset::from_rows(&[
            row("2024-01-05", "food", "90000000000000000"),
            row("2024-01-06", "food", "90000000000000000"),
            row("2024-01-07", "rent", "1000000000000"),
        ]);
        let stats = DashboardStats::generate(&dataset);
        assert_eq!(stats.total_spent, Money::from_cents(100_000_000_000_000));
        assert_eq!(stats.record_count, 3);
        assert_eq!(CategorySummary::generate(&dataset).total, stats.total_spent);
        assert_eq!(MonthlySummary::generate(&dataset).total, stats.total_spent);
    }

    #[test]
    fn test_chart_selection() {
        let dataset = sample_dataset();
        assert_eq!(
            ChartSelection::Category.build(&dataset, "₹").kind,
            ChartKind::Bar
        );
        assert_eq!(
            ChartSelection::Monthly.build(&dataset, "₹").points[1].label,
            "2024-02"
        );
    }
}
