//! TUI Views module
//!
//! Contains the main views: dashboard, summaries, charts and recent
//! expenses, as well as the sidebar and status bar.

pub mod charts;
pub mod dashboard;
pub mod expense_form;
pub mod recent;
pub mod sidebar;
pub mod status_bar;
pub mod summary;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::reports::ChartSelection;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::{top_right_rect, AppLayout, MainPanelLayout};
use super::widgets::ToastWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    let main = MainPanelLayout::new(layout.main);
    render_header(frame, app.active_view, main.header);

    match app.active_view {
        ActiveView::Dashboard => dashboard::render(frame, app, main.content),
        ActiveView::CategorySummary => summary::render_category(frame, app, main.content),
        ActiveView::MonthlySummary => summary::render_monthly(frame, app, main.content),
        ActiveView::CategoryChart => {
            charts::render_selection(frame, app, main.content, ChartSelection::Category)
        }
        ActiveView::MonthlyChart => {
            charts::render_selection(frame, app, main.content, ChartSelection::Monthly)
        }
        ActiveView::RecentExpenses => recent::render(frame, app, main.content),
    }

    status_bar::render(frame, app, layout.status_bar);

    if let Some(toast) = app.toasts.current() {
        let area = top_right_rect(44, 4, layout.main);
        frame.render_widget(ToastWidget::new(toast), area);
    }

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}

/// Title and subtitle above the active view
fn render_header(frame: &mut Frame, view: ActiveView, area: Rect) {
    let subtitle = match view {
        ActiveView::Dashboard => "Quick glance at your spending and add new expenses.",
        ActiveView::RecentExpenses => "Latest records, exactly as stored.",
        _ => "Insights based on your expense history",
    };
    let title = match view {
        ActiveView::Dashboard => "Dashboard Overview",
        other => other.title(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = Paragraph::new(vec![
        Line::styled(
            title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(subtitle, Style::default().fg(Color::DarkGray)),
    ])
    .block(block);

    frame.render_widget(text, area);
}
