//! Add-expense form
//!
//! Four text fields on the dashboard with tab navigation. Unlike the text
//! menu and the CLI, the form does not fill in defaults: every field must be
//! filled in before the expense is saved.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::ExpenseDraft;
use crate::tui::app::{App, InputMode};
use crate::tui::widgets::input::TextInput;

/// Message shown when a field is left blank
pub const REQUIRED_MESSAGE: &str = "All fields are required.";

/// Which field is currently focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Date,
    Category,
    Description,
    Amount,
}

impl FormField {
    const ALL: [FormField; 4] = [
        FormField::Date,
        FormField::Category,
        FormField::Description,
        FormField::Amount,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// State for the add-expense form
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: FormField,
    inputs: [TextInput; 4],
    /// Error from the last submit
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Create an empty form
    pub fn new() -> Self {
        Self {
            focused_field: FormField::Date,
            inputs: [
                TextInput::new()
                    .label("Date (YYYY-MM-DD)")
                    .placeholder("YYYY-MM-DD"),
                TextInput::new()
                    .label("Category")
                    .placeholder("Food / Travel / Bills"),
                TextInput::new()
                    .label("Description")
                    .placeholder("Short note about expense"),
                TextInput::new().label("Amount").placeholder("Amount spent"),
            ],
            error_message: None,
        }
    }

    pub fn input(&self, field: FormField) -> &TextInput {
        &self.inputs[field.index()]
    }

    pub fn input_mut(&mut self, field: FormField) -> &mut TextInput {
        &mut self.inputs[field.index()]
    }

    /// The input under the cursor
    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        self.input_mut(self.focused_field)
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focus(self.focused_field.next());
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focus(self.focused_field.prev());
    }

    fn focus(&mut self, field: FormField) {
        self.focused_field = field;
        self.set_focused(true);
    }

    /// Show or hide the cursor in the focused field
    pub fn set_focused(&mut self, focused: bool) {
        let current = self.focused_field;
        for field in FormField::ALL {
            self.inputs[field.index()].focused = focused && field == current;
        }
    }

    /// Collect the fields into a draft, or explain what is missing
    pub fn to_draft(&mut self) -> Result<ExpenseDraft, String> {
        if self.inputs.iter().any(|input| input.value().trim().is_empty()) {
            self.error_message = Some(REQUIRED_MESSAGE.to_string());
            return Err(REQUIRED_MESSAGE.to_string());
        }

        self.error_message = None;
        Ok(ExpenseDraft::new(
            self.input(FormField::Date).value(),
            self.input(FormField::Category).value(),
            self.input(FormField::Description).value(),
            self.input(FormField::Amount).value(),
        ))
    }

    /// Clear every field and return to the first one
    pub fn reset(&mut self) {
        let focused = self.inputs.iter().any(|input| input.focused);
        for input in &mut self.inputs {
            input.clear();
        }
        self.error_message = None;
        self.focused_field = FormField::Date;
        self.set_focused(focused);
    }
}

/// Render the form
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let border_color = if editing { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Add New Expense ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Caption
            Constraint::Length(1), // Date
            Constraint::Length(1), // Category
            Constraint::Length(1), // Description
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error / hints
            Constraint::Min(0),
        ])
        .split(inner);

    let caption = Paragraph::new("Fill the details below and record your transaction.")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(caption, chunks[0]);

    let form = &mut app.expense_form;
    form.input_mut(FormField::Amount).label =
        format!("Amount ({})", app.settings.currency_symbol);

    for (row, field) in FormField::ALL.iter().enumerate() {
        frame.render_widget(form.input(*field), chunks[row + 1]);
    }

    let footer = match &form.error_message {
        Some(message) => Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red),
        )),
        None if editing => Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::raw(": next field  "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(": save  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(": leave form"),
        ]),
        None => Line::from(vec![
            Span::styled("a", Style::default().fg(Color::Yellow)),
            Span::raw(": add expense"),
        ]),
    };
    frame.render_widget(Paragraph::new(footer), chunks[6]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle() {
        assert_eq!(FormField::Date.next(), FormField::Category);
        assert_eq!(FormField::Amount.next(), FormField::Date);
        assert_eq!(FormField::Date.prev(), FormField::Amount);
    }

    #[test]
    fn test_focus_follows_field() {
        let mut form = ExpenseFormState::new();
        form.set_focused(true);
        form.next_field();

        assert!(!form.input(FormField::Date).focused);
        assert!(form.input(FormField::Category).focused);

        form.focused_input_mut().insert('x');
        assert_eq!(form.input(FormField::Category).value(), "x");
    }

    #[test]
    fn test_blank_field_is_rejected() {
        let mut form = ExpenseFormState::new();
        form.input_mut(FormField::Date).set_value("2024-01-05");
        form.input_mut(FormField::Category).set_value("food");
        form.input_mut(FormField::Description).set_value("   ");
        form.input_mut(FormField::Amount).set_value("10");

        assert_eq!(form.to_draft().unwrap_err(), REQUIRED_MESSAGE);
        assert_eq!(form.error_message.as_deref(), Some(REQUIRED_MESSAGE));

        form.input_mut(FormField::Description).set_value("tea");
        let draft = form.to_draft().unwrap();
        assert_eq!(draft, ExpenseDraft::new("2024-01-05", "food", "tea", "10"));
        assert!(form.error_message.is_none());
    }
}
