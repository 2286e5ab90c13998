//! # Gomoku Board State
//!
//! The board is the single source of truth for grid occupancy and whose turn
//! it is. It only records stones; deciding whether a stone wins is the job of
//! [`crate::games::win_detector`], and combining the two is the job of
//! [`crate::game_controller::GameController`].

use crate::error::PlacementError;
use crate::BOARD_SIZE;
use std::fmt;
use std::str::FromStr;

/// Stone color of a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The color that moves after this one
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Occupancy of a single grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Color of the stone in this cell, `None` when empty
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// Overall state of one game. `Won` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Color),
}

impl GameStatus {
    pub fn is_game_over(&self) -> bool {
        matches!(self, GameStatus::Won(_))
    }
}

/// A placement request at grid coordinate `(col, row)`.
///
/// Coordinates are signed so that requests computed from pointer positions
/// left of or above the board can still be expressed and rejected.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GomokuMove(pub i32, pub i32);

impl GomokuMove {
    pub fn col(&self) -> i32 {
        self.0
    }

    pub fn row(&self) -> i32 {
        self.1
    }
}

impl fmt::Display for GomokuMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G({},{})", self.0, self.1)
    }
}

impl FromStr for GomokuMove {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(|s| s.trim()).collect();
        if parts.len() != 2 {
            return Err("Expected format: col,row".to_string());
        }
        let col = parts[0].parse::<i32>().map_err(|e| e.to_string())?;
        let row = parts[1].parse::<i32>().map_err(|e| e.to_string())?;
        Ok(GomokuMove(col, row))
    }
}

/// The 15x15 grid, the turn flag and the game status.
///
/// Cells are indexed `[col][row]`. A cell never returns to `Empty` except
/// through [`GomokuBoard::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GomokuBoard {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    current_turn: Color,
    status: GameStatus,
}

impl Default for GomokuBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl GomokuBoard {
    /// Creates an empty board with Black to move.
    pub fn new() -> Self {
        GomokuBoard {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            current_turn: Color::Black,
            status: GameStatus::InProgress,
        }
    }

    pub fn in_bounds(col: i32, row: i32) -> bool {
        let n = BOARD_SIZE as i32;
        (0..n).contains(&col) && (0..n).contains(&row)
    }

    /// Places `color` at `(col, row)`.
    ///
    /// Does not flip the turn or evaluate a win. On error the board is left
    /// exactly as it was.
    ///
    /// # Errors
    /// * `GameAlreadyOver` - the game has been won
    /// * `OutOfBounds` - the coordinate is outside the grid
    /// * `CellOccupied` - the cell already holds a stone
    pub fn place(&mut self, col: i32, row: i32, color: Color) -> Result<(), PlacementError> {
        if self.status.is_game_over() {
            return Err(PlacementError::GameAlreadyOver);
        }
        if !Self::in_bounds(col, row) {
            return Err(PlacementError::OutOfBounds { col, row });
        }
        let cell = &mut self.cells[col as usize][row as usize];
        if !cell.is_empty() {
            return Err(PlacementError::CellOccupied { col, row });
        }
        *cell = Cell::from(color);
        Ok(())
    }

    /// Reads the cell at `(col, row)`.
    pub fn cell_at(&self, col: i32, row: i32) -> Result<Cell, PlacementError> {
        if !Self::in_bounds(col, row) {
            return Err(PlacementError::OutOfBounds { col, row });
        }
        Ok(self.cells[col as usize][row as usize])
    }

    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of stones on the board
    pub fn stone_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|column| column.iter())
            .filter(|cell| !cell.is_empty())
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.stone_count() == BOARD_SIZE * BOARD_SIZE
    }

    /// Restores the start state: empty grid, Black to move, game in progress.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Hands the move to the other color.
    pub(crate) fn pass_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
    }

    /// Ends the game. The turn flag is left on the winner.
    pub(crate) fn declare_winner(&mut self, color: Color) {
        self.status = GameStatus::Won(color);
    }
}
