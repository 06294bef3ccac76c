//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.active_view))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Help lines for the current view
fn help_lines(view: ActiveView) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("1-6", "Switch view"),
        key_line("Tab", "Switch panel focus"),
        key_line("j/k", "Move selection up/down"),
        key_line("a", "Add a new expense"),
        key_line("r", "Reload from disk"),
        Line::from(""),
    ];

    match view {
        ActiveView::Dashboard => {
            lines.push(section("Add Expense Form"));
            lines.push(Line::from(""));
            lines.push(key_line("Tab/Down", "Next field"));
            lines.push(key_line("S-Tab/Up", "Previous field"));
            lines.push(key_line("Enter", "Save expense"));
            lines.push(key_line("Esc", "Leave the form"));
            lines.push(Line::from(""));
            lines.push(Line::from("Every field is required."));
        }
        ActiveView::RecentExpenses => {
            lines.push(section("Recent Expenses"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Scroll"));
            lines.push(key_line("g/G", "Go to top/bottom"));
        }
        ActiveView::CategoryChart | ActiveView::MonthlyChart => {
            lines.push(section("Charts"));
            lines.push(Line::from(""));
            lines.push(Line::from("Run `expense chart` for a full-screen figure."));
        }
        ActiveView::CategorySummary | ActiveView::MonthlySummary => {}
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
