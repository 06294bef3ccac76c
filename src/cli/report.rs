//! CLI commands for summaries and charts

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::AsciiChartPresenter;
use crate::error::ExpenseResult;
use crate::reports::{
    CategorySummary, ChartPresenter, ChartSelection, DashboardStats, ExpenseDataset,
    MonthlySummary,
};
use crate::services::ExpenseService;
use crate::storage::Storage;
use crate::tui::TerminalFigure;

/// Summary subcommands
#[derive(Subcommand, Debug)]
pub enum SummaryCommands {
    /// Total spent per category
    Category,
    /// Total spent per month
    #[command(alias = "month")]
    Monthly,
}

/// Load the dataset, printing the informational message when there is nothing
/// to aggregate
fn load_dataset(storage: &Storage) -> ExpenseResult<Option<ExpenseDataset>> {
    let dataset = ExpenseService::new(storage).dataset()?;
    if let Some(message) = dataset.status_message() {
        println!("{}", message);
        return Ok(None);
    }
    Ok(Some(dataset))
}

/// Handle `summary`
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SummaryCommands,
) -> ExpenseResult<()> {
    let Some(dataset) = load_dataset(storage)? else {
        return Ok(());
    };

    let output = match cmd {
        SummaryCommands::Category => {
            CategorySummary::generate(&dataset).format_terminal(&settings.currency_symbol)
        }
        SummaryCommands::Monthly => {
            MonthlySummary::generate(&dataset).format_terminal(&settings.currency_symbol)
        }
    };
    println!("{}", output);

    Ok(())
}

/// Handle `chart`
pub fn handle_chart_command(
    storage: &Storage,
    settings: &Settings,
    selection: ChartSelection,
    ascii: bool,
) -> ExpenseResult<()> {
    let Some(dataset) = load_dataset(storage)? else {
        return Ok(());
    };

    let chart = selection.build(&dataset, &settings.currency_symbol);
    if ascii {
        AsciiChartPresenter::new(std::io::stdout().lock()).present(&chart)
    } else {
        TerminalFigure::new().present(&chart)
    }
}

/// Handle `stats`
pub fn handle_stats_command(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let dataset = ExpenseService::new(storage).dataset()?;
    let stats = DashboardStats::generate(&dataset);

    print!("{}", stats.format_terminal(&settings.currency_symbol));

    Ok(())
}
