//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Expense, ExpenseDraft};

/// Types of operations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// An expense was appended
    Create,
    /// An add attempt failed validation and nothing was written
    Reject,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Reject => write!(f, "REJECT"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// The stored record (create) or the raw input (reject)
    pub record: serde_json::Value,

    /// Validation message for rejected input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AuditEntry {
    /// Entry for an expense that was appended
    pub fn created(expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            record: serde_json::json!({
                "date": expense.date.format("%Y-%m-%d").to_string(),
                "category": expense.category,
                "description": expense.description,
                "amount": expense.amount.to_string(),
            }),
            message: None,
        }
    }

    /// Entry for input that failed validation
    pub fn rejected(draft: &ExpenseDraft, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Reject,
            record: serde_json::json!({
                "date": draft.date,
                "category": draft.category,
                "description": draft.description,
                "amount": draft.amount,
            }),
            message: Some(message.into()),
        }
    }

    fn field(&self, name: &str) -> &str {
        self.record.get(name).and_then(|v| v.as_str()).unwrap_or("")
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {} {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.field("date"),
            self.field("category"),
            self.field("amount"),
            self.field("description"),
        );

        if let Some(message) = &self.message {
            output.push_str(&format!("\n  Reason: {}", message));
        }

        output
    }
}
