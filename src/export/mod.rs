//! Export module for the expense tracker
//!
//! Writes the stored records together with the category and monthly
//! summaries and dashboard figures:
//! - JSON: machine-readable
//! - YAML: human-readable

pub mod json;
pub mod yaml;

pub use json::{export_full_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
