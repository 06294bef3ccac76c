//! JSON Export functionality
//!
//! Exports every stored record together with the derived summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseRow;
use crate::reports::{CategorySummary, DashboardStats, ExpenseDataset, MonthlySummary};
use crate::services::ExpenseService;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Stored rows, verbatim and in file order
    pub records: Vec<ExpenseRow>,

    /// Totals per category
    pub categories: Vec<NamedTotal>,

    /// Totals per month, chronological
    pub months: Vec<NamedTotal>,

    /// Dashboard figures
    pub stats: ExportStats,
}

/// A labelled total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedTotal {
    pub name: String,
    pub total: f64,
    pub count: usize,
}

/// Dashboard figures in export form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportStats {
    pub total_spent: f64,
    pub record_count: usize,
    pub category_count: usize,
    pub last_entry: Option<String>,
}

impl ExpenseExport {
    /// Build an export from already loaded rows
    pub fn from_rows(records: Vec<ExpenseRow>) -> Self {
        let dataset = ExpenseDataset::from_rows(&records);
        let categories = CategorySummary::generate(&dataset)
            .rows
            .into_iter()
            .map(|row| NamedTotal {
                name: row.category,
                total: row.total.as_f64(),
                count: row.count,
            })
            .collect();
        let months = MonthlySummary::generate(&dataset)
            .rows
            .into_iter()
            .map(|row| NamedTotal {
                name: row.month.to_string(),
                total: row.total.as_f64(),
                count: row.count,
            })
            .collect();
        let stats = DashboardStats::generate(&dataset);

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            records,
            categories,
            months,
            stats: ExportStats {
                total_spent: stats.total_spent.as_f64(),
                record_count: stats.record_count,
                category_count: stats.category_count,
                last_entry: stats.last_entry.map(|d| d.to_string()),
            },
        }
    }

    /// Build an export from the store
    pub fn from_service(service: &ExpenseService) -> ExpenseResult<Self> {
        Ok(Self::from_rows(service.list(None)?))
    }
}

/// Export everything to JSON
pub fn export_full_json<W: Write>(
    service: &ExpenseService,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = ExpenseExport::from_service(service)?;

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExpensePaths, Settings};
    use crate::models::ExpenseDraft;
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default());
        (temp_dir, storage)
    }

    #[test]
    fn test_json_export() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        for (date, category, amount) in [
            ("2024-01-05", "food", "100"),
            ("2024-01-20", "food", "50"),
            ("2024-02-01", "travel", "200"),
        ] {
            service
                .add(&ExpenseDraft::new(date, category, "", amount))
                .unwrap();
        }

        let mut output = Vec::new();
        export_full_json(&service, &mut output, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["records"].as_array().unwrap().len(), 3);
        assert_eq!(value["categories"][0]["name"], "food");
        assert_eq!(value["categories"][0]["total"], 150.0);
        assert_eq!(value["months"][1]["name"], "2024-02");
        assert_eq!(value["stats"]["total_spent"], 350.0);
        assert_eq!(value["stats"]["last_entry"], "2024-02-01");
    }

    #[test]
    fn test_empty_export() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let mut output = Vec::new();
        export_full_json(&service, &mut output, false).unwrap();

        let export: ExpenseExport = serde_json::from_slice(&output).unwrap();
        assert!(export.records.is_empty());
        assert_eq!(export.stats.last_entry, None);
    }
}
