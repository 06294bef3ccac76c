//! Category Summary
//!
//! Total spent per distinct category label.

use std::collections::BTreeMap;

use super::chart::{Chart, ChartKind};
use super::dataset::ExpenseDataset;
use crate::models::Money;

/// Total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category label as stored
    pub category: String,
    /// Sum of amounts
    pub total: Money,
    /// Number of records
    pub count: usize,
    /// Share of the overall total, zero when that total is not positive
    pub percentage: f64,
}

/// Category Summary
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    /// One row per distinct category, sorted by label
    pub rows: Vec<CategoryTotal>,
    /// Sum over every row
    pub total: Money,
}

impl CategorySummary {
    /// Group the dataset by category
    pub fn generate(dataset: &ExpenseDataset) -> Self {
        let mut groups: BTreeMap<&str, (Money, usize)> = BTreeMap::new();
        for expense in dataset.expenses() {
            let entry = groups
                .entry(expense.category.as_str())
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        let total: Money = groups.values().map(|(sum, _)| *sum).sum();

        let rows = groups
            .into_iter()
            .map(|(category, (sum, count))| CategoryTotal {
                category: category.to_string(),
                total: sum,
                count,
                percentage: share(sum, total),
            })
            .collect();

        Self { rows, total }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total for a category, if present
    pub fn get(&self, category: &str) -> Option<Money> {
        self.rows
            .iter()
            .find(|row| row.category == category)
            .map(|row| row.total)
    }

    /// Bar chart of category totals
    pub fn to_chart(&self, currency_symbol: &str) -> Chart {
        let mut chart = Chart::new(
            "Category-wise Expenses",
            "Category",
            format!("Total Amount ({})", currency_symbol),
            ChartKind::Bar,
        );
        for row in &self.rows {
            chart.push(row.category.clone(), row.total);
        }
        chart
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Category Summary\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>14} {:>8}\n",
            "Category", "Amount", "Count"
        ));
        output.push_str(&"-".repeat(50));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<24} {:>14} {:>8}\n",
                row.category,
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

pub(crate) fn share(part: Money, total: Money) -> f64 {
    if total.cents() <= 0 {
        0.0
    } else {
        part.cents() as f64 / total.cents() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::tests::sample_dataset;

    #[test]
    fn test_generate_category_summary() {
        let summary = CategorySummary::generate(&sample_dataset());

        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].category, "food");
        assert_eq!(summary.rows[0].total, Money::from_cents(15000));
        assert_eq!(summary.rows[0].count, 2);
        assert_eq!(summary.get("travel"), Some(Money::from_cents(20000)));
        assert_eq!(summary.total, Money::from_cents(35000));
    }

    #[test]
    fn test_percentages() {
        let summary = CategorySummary::generate(&sample_dataset());
        let food = &summary.rows[0];
        assert!((food.percentage - 150.0 / 350.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_dataset() {
        let summary = CategorySummary::generate(&ExpenseDataset::missing());
        assert!(summary.is_empty());
        assert_eq!(summary.total, Money::zero());
        assert!(summary.to_chart("₹").is_empty());
    }

    #[test]
    fn test_chart_and_format() {
        let summary = CategorySummary::generate(&sample_dataset());

        let chart = summary.to_chart("₹");
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.y_label, "Total Amount (₹)");
        assert_eq!(chart.points.len(), 2);

        let text = summary.format_terminal("₹");
        assert!(text.contains("food"));
        assert!(text.contains("₹350.00"));
    }
}
