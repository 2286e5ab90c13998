//! # Line-mode Shell
//!
//! A plain text front end for terminals without mouse support. Commands are
//! read one per line:
//!
//! - `col,row` places a stone, e.g. `7,7`
//! - `restart` starts over
//! - `quit` exits
//!
//! Input and output are generic so the shell can be driven from tests.

use crate::app::App;
use crate::config::AppConfig;
use crate::game_controller::MoveResult;
use crate::games::gomoku::{Cell, GomokuBoard, GomokuMove};
use crate::BOARD_SIZE;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(GomokuMove),
    Restart,
    Quit,
    Help,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "restart" | "r" => Ok(Command::Restart),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            "help" | "h" | "?" => Ok(Command::Help),
            other => other.parse::<GomokuMove>().map(Command::Place),
        }
    }
}

const HELP: &str = "Commands: <col>,<row> to place (0-14), 'restart', 'quit'";

/// Runs the shell until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W, config: AppConfig) -> io::Result<()> {
    let mut app = App::new(config);
    writeln!(output, "{}", HELP)?;
    print_position(output, &app)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "invalid input: {}", e)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Restart => {
                app.reset_game();
                print_position(output, &app)?;
            }
            Command::Place(mv) => match app.play_at(mv.col(), mv.row()) {
                MoveResult::Rejected(reason) => writeln!(output, "{}", reason)?,
                MoveResult::Placed { .. } => print_position(output, &app)?,
                MoveResult::Won { .. } => {
                    print_position(output, &app)?;
                    std::thread::sleep(app.config.announce_delay);
                    app.update();
                    if let Some(text) = app.announcement.take() {
                        writeln!(output, "{}", paint(&text, &app, |s| s.bold().to_string()))?;
                    }
                }
            },
        }
    }

    app.shutdown();
    Ok(())
}

fn print_position<W: Write>(output: &mut W, app: &App) -> io::Result<()> {
    write!(output, "{}", format_board(app.controller.board(), app.config.use_color))?;
    writeln!(output, "{}", paint(&app.status_text(), app, |s| s.bold().to_string()))
}

fn paint(text: &str, app: &App, style: impl Fn(&str) -> String) -> String {
    if app.config.use_color {
        style(text)
    } else {
        text.to_string()
    }
}

/// Renders the board as text, one row per line with row and column numbers
pub fn format_board(board: &GomokuBoard, use_color: bool) -> String {
    let mut out = String::from("   ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!("{:<2}", col % 10));
    }
    out.push('\n');

    for row in 0..BOARD_SIZE as i32 {
        out.push_str(&format!("{:>2} ", row));
        for col in 0..BOARD_SIZE as i32 {
            let cell = board.cell_at(col, row).unwrap_or_default();
            let glyph = match (cell, use_color) {
                (Cell::Black, true) => "X".bright_white().on_black().bold().to_string(),
                (Cell::White, true) => "O".black().on_bright_white().bold().to_string(),
                (Cell::Empty, true) => ".".dimmed().to_string(),
                (Cell::Black, false) => "X".to_string(),
                (Cell::White, false) => "O".to_string(),
                (Cell::Empty, false) => ".".to_string(),
            };
            out.push_str(&glyph);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
