//! Expense display formatting
//!
//! Stored rows are shown as a grid table, values exactly as stored.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::audit::AuditEntry;
use crate::models::ExpenseRow;

#[derive(Tabled)]
struct RecordLine<'a> {
    #[tabled(rename = "Date")]
    date: &'a str,
    #[tabled(rename = "Category")]
    category: &'a str,
    #[tabled(rename = "Description")]
    description: &'a str,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format stored rows as a grid table
pub fn format_expense_table(rows: &[ExpenseRow], currency_symbol: &str) -> String {
    if rows.is_empty() {
        return "No expenses found".to_string();
    }

    let lines = rows.iter().map(|row| RecordLine {
        date: &row.date,
        category: &row.category,
        description: &row.description,
        amount: format!("{}{}", currency_symbol, row.amount),
    });

    Table::new(lines).with(Style::ascii()).to_string()
}

/// Format audit entries, one per line
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded yet.".to_string();
    }

    entries
        .iter()
        .map(|entry| entry.format_human_readable())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, category: &str, description: &str, amount: &str) -> ExpenseRow {
        ExpenseRow {
            date: date.into(),
            category: category.into(),
            description: description.into(),
            amount: amount.into(),
        }
    }

    #[test]
    fn test_table_shows_rows_verbatim() {
        let rows = vec![
            row("2024-01-05", "food", "lunch, with team", "100.00"),
            row("someday", "misc", "typo", "1OO"),
        ];
        let table = format_expense_table(&rows, "₹");

        assert!(table.contains("Description"));
        assert!(table.contains("lunch, with team"));
        assert!(table.contains("₹100.00"));
        assert!(table.contains("₹1OO"));
        assert!(table.find("2024-01-05") < table.find("someday"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "₹"), "No expenses found");
        assert_eq!(format_history(&[]), "No history recorded yet.");
    }
}
