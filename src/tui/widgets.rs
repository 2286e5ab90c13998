//! # UI Widgets Module
//!
//! Drawing functions for the game view: the board, the info panel, the
//! restart button and the victory popup. They only read from [`App`].

use crate::app::{App, AppMode};
use crate::games::gomoku::Cell;
use crate::tui::layout::{self, CELL_WIDTH, ROW_LABEL_WIDTH};
use crate::BOARD_SIZE;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Board background, a wood tone when colors are enabled
const BOARD_BG: Color = Color::Rgb(222, 184, 135);
const GRID_FG: Color = Color::Rgb(90, 61, 28);

pub fn render(app: &mut App, frame: &mut Frame) {
    let screen = frame.size();
    let areas = layout::game_layout(screen);

    draw_board(frame, app, areas.board);
    draw_game_info(frame, app, areas.info);
    draw_restart_button(frame, areas.restart_button);

    if let Some(text) = &app.announcement {
        draw_announcement(frame, text, screen);
    }
}

/// Column letter of a grid column (`A` for 0)
pub fn column_label(col: usize) -> char {
    (b'A' + col as u8) as char
}

fn draw_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner_area = layout::board_inner(area);
    f.render_widget(block, area);

    let use_color = app.config.use_color;
    let base = if use_color {
        Style::default().fg(GRID_FG).bg(BOARD_BG)
    } else {
        Style::default()
    };

    let mut board_lines = Vec::with_capacity(BOARD_SIZE + 1);

    let mut header = " ".repeat(ROW_LABEL_WIDTH as usize);
    for col in 0..BOARD_SIZE {
        header.push(column_label(col));
        header.push_str(&" ".repeat(CELL_WIDTH as usize - 1));
    }
    board_lines.push(Line::from(Span::styled(header, base)));

    let board = app.controller.board();
    for row in 0..BOARD_SIZE as i32 {
        let mut line_spans = vec![Span::styled(
            format!("{:>width$} ", row, width = ROW_LABEL_WIDTH as usize - 1),
            base,
        )];
        for col in 0..BOARD_SIZE as i32 {
            let cell = board.cell_at(col, row).unwrap_or_default();
            let is_cursor = (col, row) == app.board_cursor;
            let (symbol, mut style) = cell_style(cell, use_color);
            style = base.patch(style);
            if is_cursor && app.mode == AppMode::InGame {
                style = style.add_modifier(Modifier::REVERSED);
            }
            line_spans.push(Span::styled(symbol, style));
            line_spans.push(Span::styled(" ", base));
        }
        board_lines.push(Line::from(line_spans));
    }

    f.render_widget(Paragraph::new(board_lines), inner_area);
}

/// Glyph and style of a cell
pub fn cell_style(cell: Cell, use_color: bool) -> (&'static str, Style) {
    if !use_color {
        let symbol = match cell {
            Cell::Black => "X",
            Cell::White => "O",
            Cell::Empty => "·",
        };
        return (symbol, Style::default());
    }
    match cell {
        Cell::Black => (
            "●",
            Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
        ),
        Cell::White => (
            "●",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Cell::Empty => ("+", Style::default().fg(GRID_FG)),
    }
}

fn draw_game_info(f: &mut Frame, app: &App, area: Rect) {
    let status_style = if app.config.use_color {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut text = vec![
        Line::from(Span::styled(app.status_text(), status_style)),
        Line::from(""),
    ];
    if let Some(last) = app.last_move_text() {
        text.push(Line::from(last));
        text.push(Line::from(""));
    }

    let (col, row) = app.board_cursor;
    text.push(Line::from(format!(
        "Cursor: {}{}",
        column_label(col as usize),
        row
    )));
    text.push(Line::from(""));
    text.push(Line::from("Click a point or use arrow keys + Enter"));
    text.push(Line::from("'r' restart, 'q' quit"));

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Gomoku"));
    f.render_widget(paragraph, area);
}

fn draw_restart_button(f: &mut Frame, area: Rect) {
    let button = Paragraph::new("[ Restart ]")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, area);
}

fn draw_announcement(f: &mut Frame, text: &str, screen: Rect) {
    let width = text.chars().count() as u16 + 8;
    let popup = layout::centered(screen, width, 5);
    let paragraph = Paragraph::new(vec![
        Line::from(text.to_string()),
        Line::from(""),
        Line::from("press any key"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Game Over"));
    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(app, f)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    fn plain_app() -> App {
        App::new(AppConfig {
            announce_delay: Duration::ZERO,
            use_color: false,
        })
    }

    #[test]
    fn test_column_labels() {
        assert_eq!(column_label(0), 'A');
        assert_eq!(column_label(14), 'O');
    }

    #[test]
    fn test_render_empty_board() {
        let mut app = plain_app();
        let text = screen_text(&mut app);
        assert!(text.contains("A B C D E F G H I J K L M N O"));
        assert!(text.contains("Current turn: Black"));
        assert!(text.contains("[ Restart ]"));
        assert!(!text.contains('X'));
    }

    #[test]
    fn test_render_stones_and_popup() {
        let mut app = plain_app();
        app.play_at(0, 0);
        app.play_at(1, 0);
        let text = screen_text(&mut app);
        let first_row = text.lines().nth(2).unwrap();
        assert!(first_row.contains(" 0 X O"), "{:?}", first_row);
        assert!(text.contains("Last move: White G(1,0)"));

        app.announcement = Some("Black wins!".to_string());
        let text = screen_text(&mut app);
        assert!(text.contains("Black wins!"));
        assert!(text.contains("press any key"));
    }
}
