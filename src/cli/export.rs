//! CLI command for data export

use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{json, yaml};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Handle `export`, writing to `output` or stdout
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
    pretty: bool,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(&service, &mut writer, format, pretty)?;
            writer
                .flush()
                .map_err(|e| ExpenseError::Export(e.to_string()))?;
            println!("Expenses exported to: {}", path.display());
        }
        None => {
            let mut writer = std::io::stdout().lock();
            write_export(&service, &mut writer, format, pretty)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    service: &ExpenseService,
    writer: &mut W,
    format: ExportFormat,
    pretty: bool,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Json => json::export_full_json(service, writer, pretty),
        ExportFormat::Yaml => yaml::export_full_yaml(service, writer),
    }
}
