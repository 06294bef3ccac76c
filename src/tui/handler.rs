//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

use super::app::{ActiveDialog, ActiveView, App, FocusedPanel, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Key(_) | Event::Resize(_, _) => Ok(()),
        Event::Tick => {
            app.toasts.expire(Instant::now());
            Ok(())
        }
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    // Any key closes a dialog
    if app.has_dialog() {
        app.close_dialog();
        return Ok(());
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Tab => {
            app.toggle_panel_focus();
            return Ok(());
        }
        KeyCode::Char('a') => {
            app.start_editing();
            return Ok(());
        }
        KeyCode::Char('r') => {
            app.refresh();
            app.set_status("Reloaded");
            return Ok(());
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(view) = ActiveView::from_key(c) {
                app.switch_view(view);
            }
            return Ok(());
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.focused_panel = FocusedPanel::Sidebar;
            return Ok(());
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.focused_panel = FocusedPanel::Main;
            return Ok(());
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Sidebar => handle_sidebar_key(app, key),
        FocusedPanel::Main => handle_main_panel_key(app, key),
    }
}

/// Handle keys when sidebar is focused
fn handle_sidebar_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.next_view(),
        KeyCode::Char('k') | KeyCode::Up => app.prev_view(),
        KeyCode::Enter => {
            if app.active_view == ActiveView::Dashboard {
                app.start_editing();
            } else {
                app.focused_panel = FocusedPanel::Main;
            }
        }
        _ => {}
    }

    Ok(())
}

/// Handle keys when main panel is focused
fn handle_main_panel_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_view {
        ActiveView::Dashboard => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('i')) {
                app.start_editing();
            }
        }
        ActiveView::RecentExpenses => match key.code {
            KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
            KeyCode::Char('g') | KeyCode::Home => app.scroll_offset = 0,
            KeyCode::Char('G') | KeyCode::End => {
                app.scroll_offset = app.recent.len().saturating_sub(1);
            }
            _ => {}
        },
        _ => match key.code {
            KeyCode::Char('j') | KeyCode::Down => app.next_view(),
            KeyCode::Char('k') | KeyCode::Up => app.prev_view(),
            _ => {}
        },
    }

    Ok(())
}

/// Handle keys while typing into the add-expense form
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.stop_editing(),
        KeyCode::Enter => app.submit_expense(),
        KeyCode::Tab | KeyCode::Down => app.expense_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.expense_form.prev_field(),
        code => {
            let input = app.expense_form.focused_input_mut();
            match code {
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_start(),
                KeyCode::End => input.move_end(),
                KeyCode::Char(c) => input.insert(c),
                _ => {}
            }
        }
    }

    Ok(())
}
