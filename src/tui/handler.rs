//! Event handler for the TUI
//!
//! Routes keyboard events to the active dialog or to the dashboard keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.active_dialog {
        ActiveDialog::AddTransaction => {
            dialogs::transaction::handle_key(app, key);
        }
        ActiveDialog::AddCategory => {
            dialogs::category::handle_key(app, key);
        }
        ActiveDialog::Withdraw => {
            dialogs::withdraw::handle_key(app, key);
        }
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::None => handle_dashboard_key(app, key),
    }
}

/// Handle keys when no dialog is open
fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Esc => app.clear_status(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_period(),
        KeyCode::Right | KeyCode::Char('l') => app.next_period(),
        KeyCode::Char('a') => {
            app.clear_status();
            app.open_dialog(ActiveDialog::AddTransaction);
        }
        KeyCode::Char('c') => {
            app.clear_status();
            app.open_dialog(ActiveDialog::AddCategory);
        }
        KeyCode::Char('w') => {
            app.clear_status();
            app.open_dialog(ActiveDialog::Withdraw);
        }
        KeyCode::Char('d') => app.toggle_dark_mode(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        _ => {}
    }
}
