//! Toasts for the outcome of dashboard actions
//!
//! A toast sits in the top-right corner of the main panel until it expires.
//! Errors stay up longer than confirmations, and a repeated message refreshes
//! the existing toast instead of stacking a copy.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Most toasts kept at once; older ones are dropped first
const MAX_TOASTS: usize = 3;

/// Outcome a toast reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    /// Saved, but something around the save failed
    Warning,
    Error,
}

impl ToastLevel {
    fn color(self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    fn heading(self) -> &'static str {
        match self {
            Self::Success => " + Saved ",
            Self::Warning => " ! Saved with a warning ",
            Self::Error => " x Not saved ",
        }
    }

    fn lifetime(self) -> Duration {
        match self {
            Self::Success => Duration::from_secs(3),
            Self::Warning | Self::Error => Duration::from_secs(5),
        }
    }
}

/// One toast message
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    expires_at: Instant,
}

impl Toast {
    fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            expires_at: Instant::now() + level.lifetime(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Error)
    }

    /// Whether the toast should be gone at `now`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Toasts waiting to be shown, newest last
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast, replacing an identical newest one
    pub fn push(&mut self, toast: Toast) {
        if let Some(last) = self.toasts.back_mut() {
            if last.level == toast.level && last.message == toast.message {
                last.expires_at = toast.expires_at;
                return;
            }
        }

        self.toasts.push_back(toast);
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
    }

    /// Drop every toast that has expired at `now`
    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|toast| !toast.is_expired_at(now));
    }

    /// The toast on screen: the most recent one
    pub fn current(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Draws a toast over whatever is underneath
pub struct ToastWidget<'a> {
    toast: &'a Toast,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.toast.level.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(self.toast.level.heading())
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.toast.message.as_str())
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_outlive_confirmations() {
        let mut queue = ToastQueue::new();
        queue.push(Toast::error("Invalid amount: 'ten'"));
        queue.push(Toast::success("Expense added successfully"));

        queue.expire(Instant::now() + Duration::from_secs(4));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().level, ToastLevel::Error);

        queue.expire(Instant::now() + Duration::from_secs(6));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_repeated_message_is_not_stacked() {
        let mut queue = ToastQueue::new();
        queue.push(Toast::error("All fields are required."));
        queue.push(Toast::error("All fields are required."));
        assert_eq!(queue.len(), 1);

        queue.push(Toast::success("Expense added successfully"));
        assert_eq!(queue.current().unwrap().message, "Expense added successfully");
    }

    #[test]
    fn test_queue_keeps_newest() {
        let mut queue = ToastQueue::new();
        for i in 0..5 {
            queue.push(Toast::error(format!("error {}", i)));
        }
        assert_eq!(queue.len(), MAX_TOASTS);
        assert_eq!(queue.current().unwrap().message, "error 4");
    }

    #[test]
    fn test_render_toast() {
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        let toast = Toast::success("Expense added successfully");

        ToastWidget::new(&toast).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Saved"));
        assert!(text.contains("Expense added"));
    }
}
