//! CSV file I/O utilities
//!
//! Every helper opens the file, does its work and closes it again; no handle
//! outlives a call.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, Read, Seek, SeekFrom, Write};
use std::path::Path;

use csv::StringRecord;

use crate::error::ExpenseError;

/// Make sure `path` exists and starts with `header`
///
/// Creates the parent directory if needed. A missing or zero-length file gets
/// the header written; an existing non-empty file is left untouched.
pub fn ensure_csv_file<P: AsRef<Path>>(path: P, header: &[&str]) -> Result<(), ExpenseError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let needs_header = match fs::metadata(path) {
        Ok(meta) => meta.len() == 0,
        Err(_) => true,
    };

    if needs_header {
        let file = File::create(path).map_err(|e| {
            ExpenseError::Storage(format!("Failed to create {}: {}", path.display(), e))
        })?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(header)?;
        writer
            .flush()
            .map_err(|e| ExpenseError::Storage(format!("Failed to flush header: {}", e)))?;
    }

    Ok(())
}

/// Append one row to the end of an existing CSV file
///
/// If the file does not end with a newline (hand edited), one is added first
/// so the new row never merges into the previous one.
pub fn append_csv_row<P: AsRef<Path>>(path: P, fields: &[&str]) -> Result<(), ExpenseError> {
    let path = path.as_ref();

    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .open(path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    if !ends_with_newline(&mut file)? {
        file.write_all(b"\n")?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(fields)?;
    writer
        .flush()
        .map_err(|e| ExpenseError::Storage(format!("Failed to flush row: {}", e)))?;

    Ok(())
}

fn ends_with_newline(file: &mut File) -> Result<bool, ExpenseError> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

/// Read every data row after the header
///
/// Returns `None` if the file doesn't exist. Rows with fewer or more fields
/// than the header are returned as-is.
pub fn read_csv_rows<P: AsRef<Path>>(path: P) -> Result<Option<Vec<StringRecord>>, ExpenseError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            ExpenseError::Csv(format!("Failed to read {}: {}", path.display(), e))
        })?;
        rows.push(record);
    }

    Ok(Some(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HEADER: [&str; 2] = ["name", "value"];

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.csv");

        assert!(read_csv_rows(&path).unwrap().is_none());
    }

    #[test]
    fn test_ensure_creates_parent_and_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.csv");

        ensure_csv_file(&path, &HEADER).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "name,value\n");
        assert_eq!(read_csv_rows(&path).unwrap(), Some(vec![]));
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        ensure_csv_file(&path, &HEADER).unwrap();
        append_csv_row(&path, &["a", "1"]).unwrap();
        ensure_csv_file(&path, &HEADER).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "name,value\na,1\n");
    }

    #[test]
    fn test_ensure_fills_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");
        fs::write(&path, "").unwrap();

        ensure_csv_file(&path, &HEADER).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "name,value\n");
    }

    #[test]
    fn test_append_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        ensure_csv_file(&path, &HEADER).unwrap();
        append_csv_row(&path, &["a", "1"]).unwrap();
        append_csv_row(&path, &["with, comma", "2"]).unwrap();

        let rows = read_csv_rows(&path).unwrap().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "with, comma");
        assert_eq!(&rows[1][1], "2");
    }

    #[test]
    fn test_append_after_missing_trailing_newline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");
        fs::write(&path, "name,value\na,1").unwrap();

        append_csv_row(&path, &["b", "2"]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "name,value\na,1\nb,2\n");
    }

    #[test]
    fn test_flexible_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");
        fs::write(&path, "name,value\nonly\nx,1,extra\n").unwrap();

        let rows = read_csv_rows(&path).unwrap().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[1].len(), 3);
    }
}
