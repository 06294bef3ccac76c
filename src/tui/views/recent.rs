//! Recent expenses view
//!
//! The most recently appended rows, exactly as stored.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::{App, FocusedPanel};

/// Render the recent expenses table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let border_color = if app.focused_panel == FocusedPanel::Main {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if app.recent.is_empty() {
        let text = Paragraph::new("No expenses found")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let symbol = &app.settings.currency_symbol;
    let rows: Vec<Row> = app
        .recent
        .iter()
        .map(|row| {
            Row::new(vec![
                row.date.clone(),
                row.category.clone(),
                row.description.clone(),
                format!("{}{}", symbol, row.amount),
            ])
        })
        .collect();

    let header = Row::new(vec!["Date", "Category", "Description", "Amount"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(16),
            Constraint::Min(20),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(block)
    .highlight_style(Style::default().bg(Color::DarkGray))
    .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(app.scroll_offset));

    frame.render_stateful_widget(table, area, &mut state);
}
