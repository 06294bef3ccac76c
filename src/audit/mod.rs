//! Audit log for the expense tracker
//!
//! Every add attempt leaves one line in an append-only JSONL file next to the
//! settings: a `create` entry with the stored record, or a `reject` entry with
//! the raw input and the validation message.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::created(&expense))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
