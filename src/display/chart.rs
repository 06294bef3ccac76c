//! Text rendering of charts
//!
//! Draws a [`Chart`] as horizontal bars, one line per point, for terminals
//! where a full-screen figure is not wanted.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::{Chart, ChartKind, ChartPresenter};

/// Default bar width in characters
pub const DEFAULT_BAR_WIDTH: usize = 40;

/// Create a simple bar representation of `value` relative to `max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render a chart as text
pub fn format_chart(chart: &Chart, width: usize) -> String {
    let mut output = String::new();

    output.push_str(&chart.title);
    output.push('\n');
    output.push_str(&"═".repeat(chart.title.chars().count()));
    output.push('\n');

    if chart.is_empty() {
        output.push_str("Nothing to plot.\n");
        return output;
    }

    output.push_str(&format!("{} by {}\n\n", chart.y_label, chart.x_label));

    let label_width = chart
        .points
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0);
    let max = chart.max_value().as_f64();
    let marker = match chart.kind {
        ChartKind::Bar => "",
        ChartKind::Line => "●",
    };

    for point in &chart.points {
        output.push_str(&format!(
            "{:<label_width$} │{}{} {}\n",
            point.label,
            format_bar(point.value.as_f64(), max, width),
            marker,
            point.value,
        ));
    }

    output
}

/// Presents charts by writing them as text
pub struct AsciiChartPresenter<W: Write> {
    writer: W,
    width: usize,
}

impl<W: Write> AsciiChartPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            width: DEFAULT_BAR_WIDTH,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ChartPresenter for AsciiChartPresenter<W> {
    fn present(&mut self, chart: &Chart) -> ExpenseResult<()> {
        write!(self.writer, "{}", format_chart(chart, self.width))
            .map_err(|e| ExpenseError::Io(format!("Failed to draw chart: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(format_bar(10.0, 10.0, 4), "████");
        assert_eq!(format_bar(-3.0, 10.0, 4), "    ");
        assert_eq!(format_bar(1.0, 0.0, 2), "  ");
    }

    #[test]
    fn test_present_writes_every_point() {
        let mut chart = Chart::new("Category-wise Expenses", "Category", "Total", ChartKind::Bar);
        chart.push("food", Money::from_cents(15000));
        chart.push("travel", Money::from_cents(20000));

        let mut presenter = AsciiChartPresenter::new(Vec::new()).with_width(10);
        presenter.present(&chart).unwrap();
        let text = String::from_utf8(presenter.into_inner()).unwrap();

        assert!(text.starts_with("Category-wise Expenses\n"));
        assert!(text.contains("food   │████████░░ 150.00"));
        assert!(text.contains("travel │██████████ 200.00"));
    }

    #[test]
    fn test_empty_chart() {
        let chart = Chart::new("Month-wise Expenses", "Month", "Total", ChartKind::Line);
        assert!(format_chart(&chart, 10).contains("Nothing to plot."));
    }
}
