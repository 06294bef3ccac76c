//! Dashboard view
//!
//! Stat cards for the whole dataset above the add-expense form.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::DashboardLayout;

use super::expense_form;

/// Render the dashboard into the content area
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = DashboardLayout::new(area);

    let stats = app.stats();
    let cards = stats.cards(&app.settings.currency_symbol);
    for ((title, value), card_area) in cards.iter().zip(layout.cards) {
        render_card(frame, title, value, card_area);
    }

    expense_form::render(frame, app, layout.form);
}

fn render_card(frame: &mut Frame, title: &str, value: &str, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = Paragraph::new(Line::styled(
        value.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .block(block);

    frame.render_widget(text, area);
}
