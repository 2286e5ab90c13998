//! # Layout Module
//!
//! Screen geometry of the game view. The board panel has a fixed size so that
//! a terminal cell maps to exactly one grid coordinate:
//!
//! ```text
//! ┌Board─────────
//! │   A B C D E F ...
//! │ 0 · · · · · ·
//! │ 1 · · · X · ·
//! │ 2 · · O · · ·
//! ```
//!
//! The first three inner columns are the row number gutter, then every grid
//! cell takes two terminal columns and one row.

use crate::BOARD_SIZE;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminal columns per board cell
pub const CELL_WIDTH: u16 = 2;
/// Width of the row number gutter
pub const ROW_LABEL_WIDTH: u16 = 3;
/// Rows taken by the column letters
pub const HEADER_HEIGHT: u16 = 1;
/// Panel border thickness
pub const BORDER: u16 = 1;

pub const BOARD_PANEL_WIDTH: u16 = 2 * BORDER + ROW_LABEL_WIDTH + CELL_WIDTH * BOARD_SIZE as u16;
pub const BOARD_PANEL_HEIGHT: u16 = 2 * BORDER + HEADER_HEIGHT + BOARD_SIZE as u16;

/// Height of the restart button
const BUTTON_HEIGHT: u16 = 3;

/// Areas of the in-game screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    pub board: Rect,
    pub info: Rect,
    pub restart_button: Rect,
}

/// Splits the screen into the board panel on the left and the info column
/// (status text above a restart button) on the right.
pub fn game_layout(area: Rect) -> GameLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_PANEL_WIDTH), Constraint::Min(0)])
        .split(area);

    let board_column = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(BOARD_PANEL_HEIGHT), Constraint::Min(0)])
        .split(columns[0]);

    let info_column = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(BUTTON_HEIGHT)])
        .split(columns[1]);

    GameLayout {
        board: board_column[0],
        info: info_column[0],
        restart_button: info_column[1],
    }
}

/// Area inside the board panel border
pub fn board_inner(board: Rect) -> Rect {
    Rect::new(
        board.x.saturating_add(BORDER),
        board.y.saturating_add(BORDER),
        board.width.saturating_sub(2 * BORDER),
        board.height.saturating_sub(2 * BORDER),
    )
}

pub fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// A rectangle of at most `width` x `height` centered in `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
