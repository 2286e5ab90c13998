//! # Input Handling Module
//!
//! Keyboard handling for the game view. Mouse events are forwarded to
//! [`crate::tui::mouse`].

use crate::app::{App, AppMode};
use crate::tui::mouse;
use crossterm::event::{KeyCode, MouseEventKind};
use ratatui::layout::Rect;

/// Handles keyboard input based on the current application mode
///
/// While the victory popup is shown, any key other than quit only dismisses it.
pub fn handle_key_press(app: &mut App, key_code: KeyCode) {
    if matches!(key_code, KeyCode::Char('q') | KeyCode::Esc) {
        app.should_quit = true;
        return;
    }
    if app.announcement.is_some() {
        app.dismiss_announcement();
        return;
    }

    match app.mode {
        AppMode::InGame => handle_ingame_input(key_code, app),
        AppMode::GameOver => handle_game_over_input(key_code, app),
    }
}

/// Handles mouse events by delegating to the mouse module
pub fn handle_mouse_event(app: &mut App, kind: MouseEventKind, col: u16, row: u16, terminal_size: Rect) {
    mouse::handle_mouse_event(app, kind, col, row, terminal_size);
}

fn handle_ingame_input(key_code: KeyCode, app: &mut App) {
    match key_code {
        KeyCode::Char('r') => app.reset_game(),
        KeyCode::Up => app.move_cursor(0, -1),
        KeyCode::Down => app.move_cursor(0, 1),
        KeyCode::Left => app.move_cursor(-1, 0),
        KeyCode::Right => app.move_cursor(1, 0),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.play_cursor();
        }
        _ => {}
    }
}

fn handle_game_over_input(key_code: KeyCode, app: &mut App) {
    if let KeyCode::Char('r') = key_code {
        app.reset_game();
    }
}
