//! CLI commands for expense records
//!
//! Adding, listing and the audit history.

use chrono::Local;
use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_expense_table, format_history};
use crate::error::ExpenseResult;
use crate::models::ExpenseDraft;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Category, defaults to the configured default category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Short note about the expense
    #[arg(short = 'm', long)]
    pub description: Option<String>,
}

/// Handle `add`
pub fn handle_add_command(storage: &Storage, settings: &Settings, args: AddArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    let draft = ExpenseDraft::new(
        args.date.unwrap_or_default(),
        args.category.unwrap_or_default(),
        args.description.unwrap_or_default(),
        args.amount,
    )
    .date_or(Local::now().date_naive());

    let added = service.add(&draft)?;
    let expense = &added.expense;

    println!(
        "Expense added: {} {} {} ({})",
        expense.date,
        expense.category,
        expense.amount.format_with_symbol(&settings.currency_symbol),
        expense.description
    );
    if let Some(warning) = &added.audit_warning {
        eprintln!("Warning: {}", warning);
    }

    Ok(())
}

/// Handle `list`
pub fn handle_list_command(
    storage: &Storage,
    settings: &Settings,
    limit: Option<usize>,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let rows = service.list(limit)?;

    println!("{}", format_expense_table(&rows, &settings.currency_symbol));

    Ok(())
}

/// Handle `history`
pub fn handle_history_command(storage: &Storage, limit: usize) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let entries = service.history(limit)?;

    println!("{}", format_history(&entries));

    Ok(())
}
