//! Terminal User Interface module
//!
//! The dashboard: a sidebar of views, stat cards, an add-expense form,
//! summary tables and charts, built with ratatui. Also provides the
//! full-screen chart figure used by the menu and the `chart` command.

pub mod app;
pub mod event;
pub mod figure;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use figure::TerminalFigure;
pub use terminal::run_tui;
