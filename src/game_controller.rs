//! # Game Controller Module - Move Orchestration
//!
//! The `GameController` owns the authoritative [`GomokuBoard`] and applies the
//! move protocol to it:
//!
//! ```text
//!   try_make_move(col, row)
//!          │
//!          ▼
//!   board.place(col, row, current_turn) ──Err──► MoveResult::Rejected
//!          │ Ok
//!          ▼
//!   win_detector at (col, row) ──win──► status = Won(color), turn kept ──► MoveResult::Won
//!          │ no win
//!          ▼
//!   turn flips ──► MoveResult::Placed
//! ```
//!
//! The board is final when `try_make_move` returns. Anything a shell does
//! afterwards (redrawing, delayed announcements) cannot change it.

use crate::error::PlacementError;
use crate::games::gomoku::{Color, GameStatus, GomokuBoard, GomokuMove};
use crate::games::win_detector::{self, Orientation};

/// Result of attempting to apply a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The stone was placed and the game continues
    Placed {
        mv: GomokuMove,
        color: Color,
        next_turn: Color,
    },
    /// The stone was placed and completed a line
    Won {
        mv: GomokuMove,
        color: Color,
        orientation: Orientation,
    },
    /// Nothing changed
    Rejected(PlacementError),
}

impl MoveResult {
    pub fn accepted(&self) -> bool {
        !matches!(self, MoveResult::Rejected(_))
    }

    pub fn rejection(&self) -> Option<PlacementError> {
        match self {
            MoveResult::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }

    pub fn color_placed(&self) -> Option<Color> {
        match self {
            MoveResult::Placed { color, .. } | MoveResult::Won { color, .. } => Some(*color),
            MoveResult::Rejected(_) => None,
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, MoveResult::Won { .. })
    }

    pub fn winning_color(&self) -> Option<Color> {
        match self {
            MoveResult::Won { color, .. } => Some(*color),
            _ => None,
        }
    }

    /// Who moves next. `None` once the game is over or when the move was rejected.
    pub fn next_turn(&self) -> Option<Color> {
        match self {
            MoveResult::Placed { next_turn, .. } => Some(*next_turn),
            _ => None,
        }
    }
}

/// The central game controller that owns the authoritative game state
///
/// # Usage
/// ```rust
/// use gomoku::game_controller::GameController;
/// use gomoku::games::gomoku::{Color, GomokuMove};
///
/// let mut controller = GameController::new();
/// let result = controller.try_make_move(GomokuMove(7, 7));
/// assert!(result.accepted());
/// assert_eq!(result.next_turn(), Some(Color::White));
///
/// assert_eq!(controller.restart(), Color::Black);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GameController {
    board: GomokuBoard,
}

impl GameController {
    pub fn new() -> Self {
        Self {
            board: GomokuBoard::new(),
        }
    }

    /// Places a stone of the current color at `mv`.
    ///
    /// The win check runs before the turn flips. On a win the status becomes
    /// `Won` and the turn flag stays on the winner.
    pub fn try_make_move(&mut self, mv: GomokuMove) -> MoveResult {
        let color = self.board.current_turn();
        if let Err(reason) = self.board.place(mv.col(), mv.row(), color) {
            return MoveResult::Rejected(reason);
        }

        match win_detector::find_winning_orientation(&self.board, mv.col(), mv.row()) {
            Some(orientation) => {
                self.board.declare_winner(color);
                MoveResult::Won {
                    mv,
                    color,
                    orientation,
                }
            }
            None => {
                self.board.pass_turn();
                MoveResult::Placed {
                    mv,
                    color,
                    next_turn: self.board.current_turn(),
                }
            }
        }
    }

    pub fn try_place(&mut self, col: i32, row: i32) -> MoveResult {
        self.try_make_move(GomokuMove(col, row))
    }

    /// Starts a fresh game and returns the color to move (always Black).
    pub fn restart(&mut self) -> Color {
        self.board.reset();
        self.board.current_turn()
    }

    /// Read-only view for rendering
    pub fn board(&self) -> &GomokuBoard {
        &self.board
    }

    pub fn current_turn(&self) -> Color {
        self.board.current_turn()
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn is_game_over(&self) -> bool {
        self.board.status().is_game_over()
    }

    pub fn winner(&self) -> Option<Color> {
        match self.board.status() {
            GameStatus::Won(color) => Some(color),
            GameStatus::InProgress => None,
        }
    }

    /// No empty cell is left and nobody has won
    pub fn is_board_full(&self) -> bool {
        !self.is_game_over() && self.board.is_full()
    }
}
