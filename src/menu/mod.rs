//! Interactive text menu
//!
//! A numbered menu reading one line per prompt. Every failure inside an
//! option is reported and control returns to the menu.

use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::display::format_expense_table;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_date, ExpenseDraft};
use crate::reports::{
    CategorySummary, ChartPresenter, ChartSelection, ExpenseDataset, MonthlySummary,
};
use crate::services::ExpenseService;
use crate::storage::Storage;

const RULE_WIDTH: usize = 40;

/// Menu options, keyed by the number the user types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ListRecent,
    CategorySummary,
    MonthlySummary,
    CategoryChart,
    MonthlyChart,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Add,
        MenuChoice::ListRecent,
        MenuChoice::CategorySummary,
        MenuChoice::MonthlySummary,
        MenuChoice::CategoryChart,
        MenuChoice::MonthlyChart,
        MenuChoice::Exit,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Add => "1",
            Self::ListRecent => "2",
            Self::CategorySummary => "3",
            Self::MonthlySummary => "4",
            Self::CategoryChart => "5",
            Self::MonthlyChart => "6",
            Self::Exit => "0",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add new expense",
            Self::ListRecent => "View recent expenses",
            Self::CategorySummary => "Category-wise summary",
            Self::MonthlySummary => "Month-wise summary",
            Self::CategoryChart => "Show category-wise chart",
            Self::MonthlyChart => "Show month-wise chart",
            Self::Exit => "Exit",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.into_iter().find(|choice| choice.key() == input)
    }
}

/// The text menu over any line source and sink
pub struct Menu<'a, R, W, P> {
    storage: &'a Storage,
    settings: &'a Settings,
    input: R,
    output: W,
    charts: P,
    today: NaiveDate,
}

impl<'a, R: BufRead, W: Write, P: ChartPresenter> Menu<'a, R, W, P> {
    pub fn new(storage: &'a Storage, settings: &'a Settings, input: R, output: W, charts: P) -> Self {
        Self {
            storage,
            settings,
            input,
            output,
            charts,
            today: Local::now().date_naive(),
        }
    }

    /// Use a fixed date for blank date input
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Hand back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> ExpenseResult<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let choice = match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => break,
                Some(choice) => choice,
                None => {
                    self.say("Invalid choice. Please try again.")?;
                    continue;
                }
            };

            match self.dispatch(choice) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => self.say(&format!("Error: {}", e))?,
            }
        }

        self.say("Thank you for using Expense Tracker!")
    }

    /// Run one option; `Ok(false)` when input ended mid-prompt
    fn dispatch(&mut self, choice: MenuChoice) -> ExpenseResult<bool> {
        match choice {
            MenuChoice::Add => self.add_expense(),
            MenuChoice::ListRecent => self.list_recent(),
            MenuChoice::CategorySummary => self.with_dataset(|menu, dataset| {
                let text = CategorySummary::generate(dataset)
                    .format_terminal(&menu.settings.currency_symbol);
                menu.say(&text)
            }),
            MenuChoice::MonthlySummary => self.with_dataset(|menu, dataset| {
                let text = MonthlySummary::generate(dataset)
                    .format_terminal(&menu.settings.currency_symbol);
                menu.say(&text)
            }),
            MenuChoice::CategoryChart => self.show_chart(ChartSelection::Category),
            MenuChoice::MonthlyChart => self.show_chart(ChartSelection::Monthly),
            MenuChoice::Exit => Ok(false),
        }
    }

    fn add_expense(&mut self) -> ExpenseResult<bool> {
        let Some(date) = self.prompt("Date (YYYY-MM-DD) [Enter for today]: ")? else {
            return Ok(false);
        };
        let draft = ExpenseDraft {
            date,
            ..ExpenseDraft::default()
        }
        .date_or(self.today);

        // Bad dates are rejected before asking for the rest.
        if let Err(e) = parse_date(&draft.date) {
            self.say(&e.to_string())?;
            return Ok(true);
        }

        let Some(category) = self.prompt("Category (food/travel/bills/other): ")? else {
            return Ok(false);
        };
        let Some(description) = self.prompt("Description: ")? else {
            return Ok(false);
        };
        let amount_prompt = format!("Amount ({}): ", self.settings.currency_symbol);
        let Some(amount) = self.prompt(&amount_prompt)? else {
            return Ok(false);
        };

        let draft = ExpenseDraft {
            category,
            description,
            amount,
            ..draft
        };

        match ExpenseService::new(self.storage).add(&draft) {
            Ok(added) => {
                self.say("Expense added")?;
                if let Some(warning) = added.audit_warning {
                    self.say(&format!("Warning: {}", warning))?;
                }
            }
            Err(e) if e.is_validation() => self.say(&e.to_string())?,
            Err(e) => return Err(e),
        }
        Ok(true)
    }

    fn list_recent(&mut self) -> ExpenseResult<bool> {
        let Some(answer) = self.prompt("How many recent records? (Blank = all): ")? else {
            return Ok(false);
        };

        // Blank and zero both mean every record.
        let limit = if answer.is_empty() {
            None
        } else {
            match answer.parse::<usize>() {
                Ok(0) => None,
                Ok(n) => Some(n),
                Err(_) => {
                    self.say(&format!("Invalid number: '{}'", answer))?;
                    return Ok(true);
                }
            }
        };

        let rows = ExpenseService::new(self.storage).list(limit)?;
        let table = format_expense_table(&rows, &self.settings.currency_symbol);
        self.say(&table)?;
        Ok(true)
    }

    fn show_chart(&mut self, selection: ChartSelection) -> ExpenseResult<bool> {
        self.with_dataset(|menu, dataset| {
            let chart = selection.build(dataset, &menu.settings.currency_symbol);
            menu.charts.present(&chart)
        })
    }

    /// Run `f` on a loaded dataset, or print why there is nothing to show
    fn with_dataset<F>(&mut self, f: F) -> ExpenseResult<bool>
    where
        F: FnOnce(&mut Self, &ExpenseDataset) -> ExpenseResult<()>,
    {
        let dataset = ExpenseService::new(self.storage).dataset()?;
        match dataset.status_message() {
            Some(message) => self.say(message)?,
            None => f(self, &dataset)?,
        }
        Ok(true)
    }

    fn print_menu(&mut self) -> ExpenseResult<()> {
        let rule = "=".repeat(RULE_WIDTH);
        let mut text = format!("\n{}\n      Expense Tracker\n{}\n", rule, rule);
        for choice in MenuChoice::ALL {
            text.push_str(&format!("{}. {}\n", choice.key(), choice.label()));
        }
        text.push_str(&rule);
        self.say(&text)
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", text).map_err(terminal_error)?;
        self.output.flush().map_err(terminal_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(terminal_error)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, text: &str) -> ExpenseResult<()> {
        writeln!(self.output, "{}", text).map_err(terminal_error)
    }
}

fn terminal_error(e: std::io::Error) -> ExpenseError {
    ExpenseError::Io(format!("Terminal I/O failed: {}", e))
}
