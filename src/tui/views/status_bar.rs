//! Status bar view
//!
//! Shows the record count, total spent, the last status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let stats = app.stats();

    let mut spans = vec![
        Span::styled(" Records: ", Style::default().fg(Color::White)),
        Span::styled(
            stats.record_count.to_string(),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" │ "),
        Span::styled("Total: ", Style::default().fg(Color::White)),
        Span::styled(
            stats
                .total_spent
                .format_with_symbol(&app.settings.currency_symbol),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.input_mode {
        InputMode::Editing => " Enter:Save  Tab:Next  Esc:Leave form ",
        InputMode::Normal => " q:Quit  ?:Help  a:Add  1-6:Views ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
