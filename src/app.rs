//! # Application State
//!
//! State of the presentation shell: the running game, the keyboard cursor,
//! the status line and the delayed victory announcement. Everything here is
//! derived from or forwarded to the [`GameController`]; the shell never edits
//! the board itself.

use crate::config::AppConfig;
use crate::game_controller::{GameController, MoveResult};
use crate::games::gomoku::{Color, GameStatus, GomokuMove};
use crate::BOARD_SIZE;
use std::time::Instant;

/// Which screen is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    InGame,
    GameOver,
}

/// The main application state
pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub controller: GameController,
    pub config: AppConfig,
    /// Keyboard cursor as `(col, row)`
    pub board_cursor: (i32, i32),
    /// Outcome of the last accepted placement, for the info panel
    pub last_result: Option<MoveResult>,
    /// Victory popup text once the announce delay has passed
    pub announcement: Option<String>,
    pending_announcement: Option<(Instant, Color)>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        log::info!("Starting a new game, {} to move", Color::Black);
        let center = (BOARD_SIZE / 2) as i32;
        Self {
            should_quit: false,
            mode: AppMode::InGame,
            controller: GameController::new(),
            config,
            board_cursor: (center, center),
            last_result: None,
            announcement: None,
            pending_announcement: None,
        }
    }

    /// Forwards a placement at `(col, row)` to the game.
    ///
    /// Rejected placements change nothing and are only logged; clicking an
    /// occupied cell or outside the grid is ignored.
    pub fn play_at(&mut self, col: i32, row: i32) -> MoveResult {
        self.play_at_time(col, row, Instant::now())
    }

    fn play_at_time(&mut self, col: i32, row: i32, now: Instant) -> MoveResult {
        let result = self.controller.try_make_move(GomokuMove(col, row));
        match result {
            MoveResult::Placed { mv, color, next_turn } => {
                log::debug!("{} played {}, {} to move", color, mv, next_turn);
                self.last_result = Some(result);
            }
            MoveResult::Won { mv, color, orientation } => {
                log::info!("{} won with {} ({} line)", color, mv, orientation.name());
                self.last_result = Some(result);
                self.mode = AppMode::GameOver;
                self.pending_announcement = Some((now + self.config.announce_delay, color));
            }
            MoveResult::Rejected(reason) => {
                log::debug!("Ignored placement at ({}, {}): {}", col, row, reason);
            }
        }
        result
    }

    /// Places a stone under the keyboard cursor
    pub fn play_cursor(&mut self) -> MoveResult {
        let (col, row) = self.board_cursor;
        self.play_at(col, row)
    }

    pub fn reset_game(&mut self) {
        let to_move = self.controller.restart();
        log::info!("Game restarted, {} to move", to_move);
        self.mode = AppMode::InGame;
        self.last_result = None;
        self.announcement = None;
        self.pending_announcement = None;
    }

    /// Called once per frame
    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    /// Shows the victory popup once its time has come. The board is already
    /// final at this point; only the popup is late.
    pub fn update_at(&mut self, now: Instant) {
        if let Some((due, winner)) = self.pending_announcement {
            if now >= due {
                self.announcement = Some(format!("{} wins!", winner));
                self.pending_announcement = None;
            }
        }
    }

    pub fn dismiss_announcement(&mut self) {
        self.announcement = None;
    }

    pub fn move_cursor(&mut self, dcol: i32, drow: i32) {
        let max = BOARD_SIZE as i32 - 1;
        let (col, row) = self.board_cursor;
        self.board_cursor = ((col + dcol).clamp(0, max), (row + drow).clamp(0, max));
    }

    /// Status line text
    pub fn status_text(&self) -> String {
        match self.controller.status() {
            GameStatus::Won(winner) => format!("Game over! {} wins", winner),
            GameStatus::InProgress if self.controller.is_board_full() => {
                "Board full! Press 'r' to restart".to_string()
            }
            GameStatus::InProgress => format!("Current turn: {}", self.controller.current_turn()),
        }
    }

    pub fn last_move_text(&self) -> Option<String> {
        self.last_result.and_then(|result| match result {
            MoveResult::Placed { mv, color, .. } | MoveResult::Won { mv, color, .. } => {
                Some(format!("Last move: {} {}", color, mv))
            }
            MoveResult::Rejected(_) => None,
        })
    }

    pub fn shutdown(&mut self) {
        log::debug!("Shutting down after {} stones", self.controller.board().stone_count());
    }
}
