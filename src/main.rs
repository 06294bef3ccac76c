use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense::cli::{
    handle_add_command, handle_chart_command, handle_export_command, handle_history_command,
    handle_list_command, handle_stats_command, handle_summary_command, AddArgs, ExportFormat,
    SummaryCommands,
};
use expense::config::{ExpensePaths, Settings};
use expense::menu::Menu;
use expense::reports::ChartSelection;
use expense::storage::Storage;
use expense::tui::TerminalFigure;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense tracker",
    long_about = "Record daily expenses in a plain CSV file and see where the money \
                  goes: category and monthly summaries, charts, a numbered menu and \
                  a terminal dashboard."
)]
struct Cli {
    /// Backing CSV file (defaults to data/expenses.csv in the data directory)
    #[arg(long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List stored expenses, oldest first
    List {
        /// Only show the most recent N records
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show totals per category or per month
    #[command(subcommand)]
    Summary(SummaryCommands),

    /// Draw a summary chart
    Chart {
        /// Which chart to draw
        #[arg(value_enum)]
        selection: ChartSelection,
        /// Print a text chart instead of opening a figure
        #[arg(long)]
        ascii: bool,
    },

    /// Show dashboard figures: total, record count, categories, last entry
    Stats,

    /// Export records and summaries
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Show recent additions from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Run the numbered text menu (default)
    Menu,

    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// Create the data directory, backing file and settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let mut paths = ExpensePaths::new()?;
    if let Some(file) = cli.file {
        paths = paths.with_expenses_file(file);
    }
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone(), &settings);

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&storage, &settings, args)?,
        Some(Commands::List { limit }) => handle_list_command(&storage, &settings, limit)?,
        Some(Commands::Summary(cmd)) => handle_summary_command(&storage, &settings, cmd)?,
        Some(Commands::Chart { selection, ascii }) => {
            handle_chart_command(&storage, &settings, selection, ascii)?
        }
        Some(Commands::Stats) => handle_stats_command(&storage, &settings)?,
        Some(Commands::Export {
            format,
            output,
            pretty,
        }) => handle_export_command(&storage, format, output, pretty)?,
        Some(Commands::History { limit }) => handle_history_command(&storage, limit)?,
        Some(Commands::Tui) => expense::tui::run_tui(&storage, &settings)?,
        Some(Commands::Init) => {
            println!("Initializing Expense Tracker at: {}", paths.base_dir().display());
            storage.initialize()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!("Expenses file: {}", paths.expenses_file().display());
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Default category:    {}", settings.default_category);
            println!("  Default description: {}", settings.default_description);
        }
        Some(Commands::Menu) | None => {
            let stdin = std::io::stdin();
            Menu::new(
                &storage,
                &settings,
                stdin.lock(),
                std::io::stdout(),
                TerminalFigure::new(),
            )
            .run()?;
        }
    }

    Ok(())
}
