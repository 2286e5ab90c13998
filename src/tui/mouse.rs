//! # Mouse Module
//!
//! Translates pointer events into game actions. Screen positions inside the
//! board are converted to grid coordinates; the game decides whether the
//! placement is legal.

use crate::app::App;
use crate::games::gomoku::GomokuBoard;
use crate::tui::layout::{self, CELL_WIDTH, HEADER_HEIGHT, ROW_LABEL_WIDTH};
use crossterm::event::{MouseButton, MouseEventKind};
use ratatui::layout::Rect;

/// Handle mouse events for the application
pub fn handle_mouse_event(app: &mut App, kind: MouseEventKind, col: u16, row: u16, terminal_size: Rect) {
    if let MouseEventKind::Down(MouseButton::Left) = kind {
        handle_mouse_click(app, col, row, terminal_size);
    }
}

/// Handle left mouse click events
fn handle_mouse_click(app: &mut App, col: u16, row: u16, terminal_size: Rect) {
    if app.announcement.is_some() {
        app.dismiss_announcement();
        return;
    }

    let areas = layout::game_layout(terminal_size);
    if layout::rect_contains(areas.restart_button, col, row) {
        app.reset_game();
        return;
    }

    if let Some((grid_col, grid_row)) = screen_to_grid(areas.board, col, row) {
        if GomokuBoard::in_bounds(grid_col, grid_row) {
            app.board_cursor = (grid_col, grid_row);
        }
        // Occupied cells and the game-over state are rejected by the game
        app.play_at(grid_col, grid_row);
    }
}

/// Maps a terminal position to a grid coordinate `(col, row)`.
///
/// Returns `None` for positions on the border, the header row or the label
/// gutter. Everything past them divides down to a coordinate, which may lie
/// beyond the grid when the panel is wider than the board.
pub fn screen_to_grid(board_area: Rect, x: u16, y: u16) -> Option<(i32, i32)> {
    let inner = layout::board_inner(board_area);
    if !layout::rect_contains(inner, x, y) {
        return None;
    }

    let rel_x = x - inner.x;
    let rel_y = y - inner.y;
    if rel_x < ROW_LABEL_WIDTH || rel_y < HEADER_HEIGHT {
        return None;
    }

    let grid_col = (rel_x - ROW_LABEL_WIDTH) / CELL_WIDTH;
    let grid_row = rel_y - HEADER_HEIGHT;
    Some((grid_col as i32, grid_row as i32))
}

/// Top-left terminal position of a grid cell
pub fn grid_to_screen(board_area: Rect, col: i32, row: i32) -> (u16, u16) {
    let inner = layout::board_inner(board_area);
    (
        inner.x + ROW_LABEL_WIDTH + col as u16 * CELL_WIDTH,
        inner.y + HEADER_HEIGHT + row as u16,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::games::gomoku::{Cell, Color};

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn click(app: &mut App, x: u16, y: u16) {
        handle_mouse_event(app, MouseEventKind::Down(MouseButton::Left), x, y, SCREEN);
    }

    fn click_cell(app: &mut App, col: i32, row: i32) {
        let board = layout::game_layout(SCREEN).board;
        let (x, y) = grid_to_screen(board, col, row);
        click(app, x, y);
    }

    #[test]
    fn test_screen_to_grid_corners() {
        let board = Rect::new(0, 0, 35, 18);
        assert_eq!(screen_to_grid(board, 4, 2), Some((0, 0)));
        assert_eq!(screen_to_grid(board, 5, 2), Some((0, 0)));
        assert_eq!(screen_to_grid(board, 6, 2), Some((1, 0)));
        assert_eq!(screen_to_grid(board, 33, 16), Some((14, 14)));
    }

    #[test]
    fn test_screen_to_grid_ignores_chrome() {
        let board = Rect::new(0, 0, 35, 18);
        assert_eq!(screen_to_grid(board, 0, 5), None); // border
        assert_eq!(screen_to_grid(board, 10, 1), None); // header
        assert_eq!(screen_to_grid(board, 2, 5), None); // row labels
        assert_eq!(screen_to_grid(board, 34, 5), None); // right border
        assert_eq!(screen_to_grid(board, 40, 5), None); // outside
    }

    #[test]
    fn test_wide_panel_maps_past_grid() {
        let board = Rect::new(0, 0, 60, 18);
        assert_eq!(screen_to_grid(board, 36, 2), Some((16, 0)));
    }

    #[test]
    fn test_grid_round_trip() {
        let board = Rect::new(3, 2, 35, 18);
        for (col, row) in [(0, 0), (7, 7), (14, 14), (3, 11)] {
            let (x, y) = grid_to_screen(board, col, row);
            assert_eq!(screen_to_grid(board, x, y), Some((col, row)));
            assert_eq!(screen_to_grid(board, x + 1, y), Some((col, row)));
        }
    }

    #[test]
    fn test_click_places_stone() {
        let mut app = App::new(AppConfig::default());
        click_cell(&mut app, 3, 4);
        assert_eq!(app.controller.board().cell_at(3, 4), Ok(Cell::Black));
        assert_eq!(app.board_cursor, (3, 4));
        assert_eq!(app.controller.current_turn(), Color::White);

        // Clicking the same cell again is ignored
        click_cell(&mut app, 3, 4);
        assert_eq!(app.controller.board().cell_at(3, 4), Ok(Cell::Black));
        assert_eq!(app.controller.current_turn(), Color::White);
    }

    #[test]
    fn test_other_buttons_do_nothing() {
        let mut app = App::new(AppConfig::default());
        handle_mouse_event(&mut app, MouseEventKind::Down(MouseButton::Right), 4, 2, SCREEN);
        click(&mut app, 10, 1);
        assert_eq!(app.controller.board().stone_count(), 0);
    }

    #[test]
    fn test_restart_button() {
        let mut app = App::new(AppConfig::default());
        click_cell(&mut app, 0, 0);
        let button = layout::game_layout(SCREEN).restart_button;
        click(&mut app, button.x + 2, button.y + 1);
        assert_eq!(app.controller.board().stone_count(), 0);
        assert_eq!(app.controller.current_turn(), Color::Black);
    }

    #[test]
    fn test_click_dismisses_announcement() {
        let mut app = App::new(AppConfig::default());
        app.announcement = Some("Black wins!".to_string());
        click_cell(&mut app, 5, 5);
        assert_eq!(app.announcement, None);
        assert_eq!(app.controller.board().stone_count(), 0);
    }
}
