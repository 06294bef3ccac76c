//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! The dataset is loaded once and reloaded after every change, so rendering
//! never touches the backing file.

use crate::config::settings::Settings;
use crate::models::ExpenseRow;
use crate::reports::{CategorySummary, DashboardStats, ExpenseDataset, MonthlySummary};
use crate::services::{AddedExpense, ExpenseService};
use crate::storage::Storage;

use super::views::expense_form::ExpenseFormState;
use super::widgets::{Toast, ToastQueue};

/// Number of rows shown in the recent expenses view
pub const RECENT_LIMIT: usize = 200;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    CategorySummary,
    MonthlySummary,
    CategoryChart,
    MonthlyChart,
    RecentExpenses,
}

impl ActiveView {
    /// Sidebar order
    pub const ALL: [ActiveView; 6] = [
        ActiveView::Dashboard,
        ActiveView::CategorySummary,
        ActiveView::MonthlySummary,
        ActiveView::CategoryChart,
        ActiveView::MonthlyChart,
        ActiveView::RecentExpenses,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::CategorySummary => "Category Summary",
            Self::MonthlySummary => "Monthly Summary",
            Self::CategoryChart => "Category Chart",
            Self::MonthlyChart => "Monthly Chart",
            Self::RecentExpenses => "Recent Expenses",
        }
    }

    /// Position in the sidebar
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    /// View bound to a number key (`1` to `6`)
    pub fn from_key(c: char) -> Option<Self> {
        let index = c.to_digit(10)?.checked_sub(1)? as usize;
        Self::ALL.get(index).copied()
    }
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the add-expense form
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Scroll offset for the recent expenses table
    pub scroll_offset: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Add-expense form on the dashboard
    pub expense_form: ExpenseFormState,

    /// Toast notifications
    pub toasts: ToastQueue,

    /// Loaded dataset
    pub dataset: ExpenseDataset,

    /// Most recent stored rows, oldest first
    pub recent: Vec<ExpenseRow>,
}

impl<'a> App<'a> {
    /// Create a new App instance and load the current data
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        let mut app = Self {
            storage,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            focused_panel: FocusedPanel::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            scroll_offset: 0,
            status_message: None,
            expense_form: ExpenseFormState::new(),
            toasts: ToastQueue::new(),
            dataset: ExpenseDataset::missing(),
            recent: Vec::new(),
        };
        app.refresh();
        app
    }

    /// Reload the dataset from storage
    pub fn refresh(&mut self) {
        let service = ExpenseService::new(self.storage);
        match service.dataset() {
            Ok(dataset) => self.dataset = dataset,
            Err(e) => self.notify(Toast::error(format!("Failed to load expenses: {}", e))),
        }
        match service.list(Some(RECENT_LIMIT)) {
            Ok(rows) => self.recent = rows,
            Err(e) => self.notify(Toast::error(format!("Failed to list expenses: {}", e))),
        }
        self.scroll_offset = self.scroll_offset.min(self.recent.len().saturating_sub(1));
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::generate(&self.dataset)
    }

    pub fn category_summary(&self) -> CategorySummary {
        CategorySummary::generate(&self.dataset)
    }

    pub fn monthly_summary(&self) -> MonthlySummary {
        MonthlySummary::generate(&self.dataset)
    }

    /// Submit the add-expense form
    ///
    /// Every field must be filled in. On success the form is cleared and the
    /// data reloaded; on failure the form keeps its contents.
    pub fn submit_expense(&mut self) {
        let draft = match self.expense_form.to_draft() {
            Ok(draft) => draft,
            Err(message) => {
                self.notify(Toast::error(message));
                return;
            }
        };

        match ExpenseService::new(self.storage).add(&draft) {
            Ok(AddedExpense {
                expense,
                audit_warning,
            }) => {
                self.expense_form.reset();
                self.set_status(format!(
                    "Added {} {}",
                    expense.category,
                    expense.amount.format_with_symbol(&self.settings.currency_symbol)
                ));
                self.notify(Toast::success("Expense added successfully"));
                if let Some(warning) = audit_warning {
                    self.notify(Toast::warning(warning));
                }
                self.refresh();
            }
            Err(e) => {
                self.expense_form.error_message = Some(e.to_string());
                self.notify(Toast::error(e.to_string()));
            }
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Queue a toast notification
    pub fn notify(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.scroll_offset = 0;
        if view != ActiveView::Dashboard {
            self.stop_editing();
        }
    }

    /// Start typing into the add-expense form
    pub fn start_editing(&mut self) {
        self.switch_view(ActiveView::Dashboard);
        self.focused_panel = FocusedPanel::Main;
        self.input_mode = InputMode::Editing;
        self.expense_form.set_focused(true);
    }

    /// Leave the add-expense form, keeping what was typed
    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
        self.expense_form.set_focused(false);
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Select the previous sidebar entry
    pub fn prev_view(&mut self) {
        let index = self.active_view.index();
        if index > 0 {
            self.switch_view(ActiveView::ALL[index - 1]);
        }
    }

    /// Select the next sidebar entry
    pub fn next_view(&mut self) {
        let index = self.active_view.index();
        if let Some(view) = ActiveView::ALL.get(index + 1) {
            self.switch_view(*view);
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.recent.len() {
            self.scroll_offset += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExpensePaths;
    use crate::tui::views::expense_form::FormField;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default());
        (temp_dir, storage)
    }

    fn fill(app: &mut App, date: &str, category: &str, description: &str, amount: &str) {
        app.expense_form.input_mut(FormField::Date).set_value(date);
        app.expense_form.input_mut(FormField::Category).set_value(category);
        app.expense_form
            .input_mut(FormField::Description)
            .set_value(description);
        app.expense_form.input_mut(FormField::Amount).set_value(amount);
    }

    #[test]
    fn test_audit_failure_shows_warning_after_save() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let paths = ExpensePaths::with_base_dir(blocker)
            .with_expenses_file(temp_dir.path().join("expenses.csv"));
        let storage = Storage::new(paths, &Settings::default());
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        fill(&mut app, "2024-01-05", "food", "lunch", "100");
        app.submit_expense();

        assert_eq!(app.stats().record_count, 1);
        let toast = app.toasts.current().unwrap();
        assert_eq!(toast.level, crate::tui::widgets::ToastLevel::Warning);
        assert!(toast.message.contains("expense history not updated"));
    }

    #[test]
    fn test_view_keys() {
        assert_eq!(ActiveView::from_key('1'), Some(ActiveView::Dashboard));
        assert_eq!(ActiveView::from_key('6'), Some(ActiveView::RecentExpenses));
        assert_eq!(ActiveView::from_key('0'), None);
        assert_eq!(ActiveView::from_key('7'), None);
    }

    #[test]
    fn test_submit_requires_every_field() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        fill(&mut app, "2024-01-05", "food", "", "100");
        app.submit_expense();

        assert_eq!(
            app.toasts.current().unwrap().message,
            "All fields are required."
        );
        assert_eq!(app.stats().record_count, 0);
    }

    #[test]
    fn test_submit_adds_and_refreshes() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        fill(&mut app, "2024-01-05", "food", "lunch", "100");
        app.submit_expense();

        let stats = app.stats();
        assert_eq!(stats.record_count, 1);
        assert_eq!(stats.last_entry_label(), "2024-01-05");
        assert_eq!(app.recent.len(), 1);
        assert!(app.expense_form.input(FormField::Amount).value().is_empty());
    }

    #[test]
    fn test_invalid_submit_keeps_form() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        fill(&mut app, "2024-01-05", "food", "lunch", "lots");
        app.submit_expense();

        assert_eq!(app.stats().record_count, 0);
        assert_eq!(app.expense_form.input(FormField::Amount).value(), "lots");
        assert!(app.expense_form.error_message.is_some());
    }

    #[test]
    fn test_view_navigation() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        app.prev_view();
        assert_eq!(app.active_view, ActiveView::Dashboard);
        app.next_view();
        assert_eq!(app.active_view, ActiveView::CategorySummary);

        app.start_editing();
        assert_eq!(app.active_view, ActiveView::Dashboard);
        assert_eq!(app.input_mode, InputMode::Editing);

        app.switch_view(ActiveView::MonthlyChart);
        assert_eq!(app.input_mode, InputMode::Normal);
    }
}
