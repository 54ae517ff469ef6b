//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, ActiveView, App, FocusedPanel};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    handle_normal_key(app, key);
    Ok(())
}

/// Route a key to the active dialog
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::AddExpense => {
            dialogs::expense::handle_key(app, key);
        }
        ActiveDialog::EditBudget(_) => {
            dialogs::budget::handle_key(app, key);
        }
        ActiveDialog::Export => {
            dialogs::export::handle_key(app, key);
        }
        // Any key closes help
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::None => {}
    }
}

/// Handle keys outside dialogs
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return;
        }
        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.clear_status();
            app.open_dialog(ActiveDialog::AddExpense);
            return;
        }
        KeyCode::Char('x') => {
            app.clear_status();
            app.open_dialog(ActiveDialog::Export);
            return;
        }
        KeyCode::Tab => {
            app.toggle_panel_focus();
            return;
        }
        KeyCode::Char('1') => {
            app.switch_view(ActiveView::History);
            return;
        }
        KeyCode::Char('2') => {
            app.switch_view(ActiveView::Monthly);
            return;
        }
        KeyCode::Char('3') => {
            app.switch_view(ActiveView::Charts);
            return;
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.focused_panel = FocusedPanel::Sidebar;
            return;
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.focused_panel = FocusedPanel::Main;
            return;
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Sidebar => handle_sidebar_key(app, key),
        FocusedPanel::Main => handle_main_panel_key(app, key),
    }
}

/// Handle keys when the Budget Settings list is focused
fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Enter | KeyCode::Char('e') => {
            let category = app.selected_category();
            app.open_dialog(ActiveDialog::EditBudget(category));
        }
        _ => {}
    }
}

/// Handle keys when the main panel is focused
fn handle_main_panel_key(app: &mut App, key: KeyEvent) {
    if app.active_view != ActiveView::History {
        return;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_history_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_history_index = app.session.ledger().len().saturating_sub(1);
        }
        _ => {}
    }
}
