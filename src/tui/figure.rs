//! Full-screen chart figure
//!
//! Shows a single chart on the alternate screen until a key is pressed,
//! then gives the terminal back.

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::{Chart, ChartPresenter};

use super::terminal::{init_terminal, restore_terminal, Tui};
use super::views::charts::render_chart;

/// Presents charts as full-screen terminal figures
#[derive(Debug, Default)]
pub struct TerminalFigure;

impl TerminalFigure {
    pub fn new() -> Self {
        Self
    }

    fn show(terminal: &mut Tui, chart: &Chart) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(5), Constraint::Length(1)])
                    .split(frame.area());

                render_chart(frame, chunks[0], chart);
                frame.render_widget(
                    Paragraph::new(" Press any key to close ")
                        .style(Style::default().fg(Color::DarkGray)),
                    chunks[1],
                );
            })?;

            // Redraw on resize, close on the first key press.
            if let CrosstermEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

impl ChartPresenter for TerminalFigure {
    fn present(&mut self, chart: &Chart) -> ExpenseResult<()> {
        let tui_error = |e: anyhow::Error| ExpenseError::Tui(e.to_string());

        let mut terminal = init_terminal().map_err(tui_error)?;
        let shown = Self::show(&mut terminal, chart);
        restore_terminal().map_err(tui_error)?;
        shown.map_err(tui_error)
    }
}
