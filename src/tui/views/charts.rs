//! Chart views
//!
//! Draws a [`Chart`] with ratatui: bar charts as a `BarChart`, line charts
//! as a braille `Chart` with one labelled point per entry. The same drawing
//! is used inside the dashboard and by the full-screen figure.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart as LineChart, Dataset, GraphType,
        Paragraph,
    },
    Frame,
};

use crate::models::Money;
use crate::reports::{Chart, ChartKind, ChartSelection};
use crate::tui::app::App;

use super::summary::NO_DATA;

/// Render one of the summary charts into the content area
pub fn render_selection(frame: &mut Frame, app: &mut App, area: Rect, selection: ChartSelection) {
    let chart = selection.build(&app.dataset, &app.settings.currency_symbol);
    render_chart(frame, area, &chart);
}

/// Render a chart description
pub fn render_chart(frame: &mut Frame, area: Rect, chart: &Chart) {
    let block = Block::default()
        .title(format!(" {} ", chart.title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if chart.is_empty() {
        let text = Paragraph::new(NO_DATA)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    match chart.kind {
        ChartKind::Bar => render_bars(frame, area, chart, block),
        ChartKind::Line => render_line(frame, area, chart, block),
    }
}

fn render_bars(frame: &mut Frame, area: Rect, chart: &Chart, block: Block) {
    let inner_width = area.width.saturating_sub(2);
    let count = chart.points.len() as u16;
    let bar_gap = 2;
    let bar_width = (inner_width.saturating_sub(bar_gap * count) / count.max(1)).clamp(3, 16);

    let bars: Vec<Bar> = chart
        .points
        .iter()
        .map(|point| {
            Bar::default()
                // Bars cannot go below the axis.
                .value(point.value.cents().max(0) as u64)
                .text_value(point.value.to_string())
                .label(Line::from(point.label.clone()))
        })
        .collect();

    let bar_chart = BarChart::default()
        .block(block.title_bottom(Line::from(format!(
            " {} / {} ",
            chart.x_label, chart.y_label
        ))))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(Color::White));

    frame.render_widget(bar_chart, area);
}

fn render_line(frame: &mut Frame, area: Rect, chart: &Chart, block: Block) {
    let points: Vec<(f64, f64)> = chart
        .points
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.value.as_f64()))
        .collect();

    let (y_min, y_max) = y_bounds(chart.min_value(), chart.max_value());
    let x_max = (points.len().saturating_sub(1)).max(1) as f64;

    let dataset = Dataset::default()
        .name(chart.y_label.clone())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let x_labels: Vec<Span> = x_axis_labels(chart)
        .into_iter()
        .map(Span::raw)
        .collect();
    let y_labels: Vec<Span> = [y_min, (y_min + y_max) / 2.0, y_max]
        .iter()
        .map(|v| Span::raw(format!("{:.0}", v)))
        .collect();

    let line_chart = LineChart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .title(chart.x_label.clone())
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(chart.y_label.clone())
                .style(Style::default().fg(Color::DarkGray))
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    frame.render_widget(line_chart, area);
}

/// Axis range covering every value and zero, with headroom above
fn y_bounds(min: Money, max: Money) -> (f64, f64) {
    let low = min.as_f64().min(0.0);
    let high = max.as_f64().max(0.0);
    if high <= low {
        (low, low + 1.0)
    } else {
        (low, high + (high - low) * 0.1)
    }
}

/// First, middle and last labels, evenly spread along the axis
fn x_axis_labels(chart: &Chart) -> Vec<String> {
    let labels: Vec<&str> = chart.points.iter().map(|p| p.label.as_str()).collect();
    match labels.len() {
        0 => Vec::new(),
        1 => vec![labels[0].to_string(), String::new()],
        2 => vec![labels[0].to_string(), labels[1].to_string()],
        n => vec![
            labels[0].to_string(),
            labels[(n - 1) / 2].to_string(),
            labels[n - 1].to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn monthly_chart(values: &[(&str, i64)]) -> Chart {
        let mut chart = Chart::new("Month-wise Expenses", "Month", "Total Amount (₹)", ChartKind::Line);
        for (label, cents) in values {
            chart.push(*label, Money::from_cents(*cents));
        }
        chart
    }

    #[test]
    fn test_y_bounds() {
        assert_eq!(y_bounds(Money::zero(), Money::zero()), (0.0, 1.0));
        let (low, high) = y_bounds(Money::from_cents(10000), Money::from_cents(20000));
        assert_eq!(low, 0.0);
        assert!((high - 220.0).abs() < 1e-9);
        assert_eq!(y_bounds(Money::from_cents(-500), Money::from_cents(-100)).0, -5.0);
    }

    #[test]
    fn test_x_axis_labels() {
        let chart = monthly_chart(&[("2024-01", 1), ("2024-02", 2), ("2024-03", 3), ("2024-04", 4)]);
        assert_eq!(x_axis_labels(&chart), ["2024-01", "2024-02", "2024-04"]);
    }

    #[test]
    fn test_render_both_kinds() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        let line = monthly_chart(&[("2024-01", 15000), ("2024-02", 20000)]);
        let mut bars = Chart::new("Category-wise Expenses", "Category", "Total", ChartKind::Bar);
        bars.push("food", Money::from_cents(15000));
        bars.push("refund", Money::from_cents(-500));

        for chart in [&line, &bars] {
            terminal
                .draw(|frame| render_chart(frame, frame.area(), chart))
                .unwrap();
            let buffer = terminal.backend().buffer().clone();
            let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
            assert!(text.contains(&chart.title));
        }
    }

    #[test]
    fn test_render_empty_chart() {
        let backend = TestBackend::new(60, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let chart = monthly_chart(&[]);

        terminal
            .draw(|frame| render_chart(frame, frame.area(), &chart))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("No data found"));
    }
}
