//! Summary table views

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::tui::app::App;

/// Shown in place of a table when there is nothing to aggregate
pub const NO_DATA: &str = "No data found. Add some expenses first.";

/// Render the category summary table
pub fn render_category(frame: &mut Frame, app: &mut App, area: Rect) {
    let summary = app.category_summary();
    let symbol = &app.settings.currency_symbol;

    let rows = summary.rows.iter().map(|row| {
        vec![
            row.category.clone(),
            row.total.format_with_symbol(symbol),
            row.count.to_string(),
            format!("{:.1}%", row.percentage),
        ]
    });

    render_table(
        frame,
        area,
        ["Category", "Amount", "Count", "Share"],
        rows.collect(),
        summary.total.format_with_symbol(symbol),
    );
}

/// Render the monthly summary table
pub fn render_monthly(frame: &mut Frame, app: &mut App, area: Rect) {
    let summary = app.monthly_summary();
    let symbol = &app.settings.currency_symbol;

    let rows = summary.rows.iter().map(|row| {
        vec![
            row.month.to_string(),
            row.total.format_with_symbol(symbol),
            row.count.to_string(),
            String::new(),
        ]
    });

    render_table(
        frame,
        area,
        ["Month", "Amount", "Count", ""],
        rows.collect(),
        summary.total.format_with_symbol(symbol),
    );
}

fn render_table(
    frame: &mut Frame,
    area: Rect,
    headers: [&str; 4],
    rows: Vec<Vec<String>>,
    total: String,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if rows.is_empty() {
        let text = Paragraph::new(NO_DATA)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let header = Row::new(headers.iter().map(|h| Cell::from(*h))).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut body: Vec<Row> = rows.into_iter().map(Row::new).collect();
    body.push(Row::new(vec![
        Cell::from("TOTAL").style(bold),
        Cell::from(total).style(bold),
    ]));

    let table = Table::new(
        body,
        [
            Constraint::Min(20),
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}
