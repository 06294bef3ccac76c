//! YAML Export functionality
//!
//! Same content as the JSON export, in a human-readable layout.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::ExpenseExport;
use crate::services::ExpenseService;

/// Export everything to YAML
pub fn export_full_yaml<W: Write>(service: &ExpenseService, writer: &mut W) -> ExpenseResult<()> {
    let export = ExpenseExport::from_service(service)?;

    writeln!(writer, "# Expense Tracker Export")
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExpensePaths, Settings};
    use crate::models::ExpenseDraft;
    use crate::storage::Storage;
    use tempfile::TempDir;

    #[test]
    fn test_yaml_export_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default());
        let service = ExpenseService::new(&storage);
        service
            .add(&ExpenseDraft::new("2024-03-10", "bills", "power", "42.5"))
            .unwrap();

        let mut output = Vec::new();
        export_full_yaml(&service, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# Expense Tracker Export"));
        let export: ExpenseExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(export.records[0].amount, "42.50");
        assert_eq!(export.months[0].name, "2024-03");
    }
}
