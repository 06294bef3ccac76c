//! Chart descriptions
//!
//! A [`Chart`] is plain data: a title, axis labels and an ordered list of
//! labelled values. Rendering is left to a [`ChartPresenter`], so the same
//! chart can be shown as a full-screen terminal figure or as ASCII bars.

use crate::error::ExpenseResult;
use crate::models::Money;

/// How the points of a chart are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// One bar per point
    Bar,
    /// Points joined in order
    Line,
}

/// A single labelled value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub label: String,
    pub value: Money,
}

/// A renderable chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub kind: ChartKind,
    pub points: Vec<ChartPoint>,
}

impl Chart {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        kind: ChartKind,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            kind,
            points: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, value: Money) {
        self.points.push(ChartPoint {
            label: label.into(),
            value,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest value, or zero for an empty chart
    pub fn max_value(&self) -> Money {
        self.points
            .iter()
            .map(|p| p.value)
            .max()
            .unwrap_or_default()
    }

    /// Smallest value, or zero for an empty chart
    pub fn min_value(&self) -> Money {
        self.points
            .iter()
            .map(|p| p.value)
            .min()
            .unwrap_or_default()
    }
}

/// Something that can show a chart to the user
pub trait ChartPresenter {
    fn present(&mut self, chart: &Chart) -> ExpenseResult<()>;
}

impl<P: ChartPresenter + ?Sized> ChartPresenter for &mut P {
    fn present(&mut self, chart: &Chart) -> ExpenseResult<()> {
        (**self).present(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let mut chart = Chart::new("t", "x", "y", ChartKind::Bar);
        assert_eq!(chart.max_value(), Money::zero());

        chart.push("a", Money::from_cents(500));
        chart.push("b", Money::from_cents(-200));
        chart.push("c", Money::from_cents(1200));

        assert_eq!(chart.max_value(), Money::from_cents(1200));
        assert_eq!(chart.min_value(), Money::from_cents(-200));
        assert_eq!(chart.points[1].label, "b");
    }
}
