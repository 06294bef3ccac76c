//! Expense service
//!
//! Business logic on top of the expense store: adding with validation and
//! auditing, listing, and loading the dataset the reports are built from.

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseDraft, ExpenseRow};
use crate::reports::ExpenseDataset;
use crate::storage::Storage;

/// A stored expense, plus a warning when its audit entry was not written
#[derive(Debug, Clone)]
pub struct AddedExpense {
    pub expense: Expense,
    pub audit_warning: Option<String>,
}

fn history_warning(err: &ExpenseError) -> String {
    format!("expense history not updated: {}", err)
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    audit: AuditLogger,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            audit: AuditLogger::new(storage.paths().audit_log()),
        }
    }

    /// Validate and append an expense
    ///
    /// Validation failures are returned to the caller and nothing is written.
    /// Both outcomes are recorded in the audit log. A failed audit write keeps
    /// the stored row and is reported through [`AddedExpense::audit_warning`],
    /// or appended to the validation message for rejected input.
    pub fn add(&self, draft: &ExpenseDraft) -> ExpenseResult<AddedExpense> {
        match self.storage.expenses.append(draft) {
            Ok(expense) => {
                let audit_warning = self
                    .audit
                    .log(&AuditEntry::created(&expense))
                    .err()
                    .map(|e| history_warning(&e));
                Ok(AddedExpense {
                    expense,
                    audit_warning,
                })
            }
            Err(ExpenseError::Validation(message)) => {
                let message = match self.audit.log(&AuditEntry::rejected(draft, &message)) {
                    Ok(()) => message,
                    Err(e) => format!("{} ({})", message, history_warning(&e)),
                };
                Err(ExpenseError::Validation(message))
            }
            Err(err) => Err(err),
        }
    }

    /// List stored rows, oldest first, optionally only the last `limit`
    pub fn list(&self, limit: Option<usize>) -> ExpenseResult<Vec<ExpenseRow>> {
        self.storage.expenses.list(limit)
    }

    /// Load and normalize every stored row for aggregation
    pub fn dataset(&self) -> ExpenseResult<ExpenseDataset> {
        ExpenseDataset::load(&self.storage.expenses)
    }

    /// Most recent audit entries, oldest first
    pub fn history(&self, limit: usize) -> ExpenseResult<Vec<AuditEntry>> {
        self.audit.read_recent(limit)
    }
}
