//! # Win Detection
//!
//! Decides whether the stone just placed at a coordinate completes a line of
//! [`WIN_LENGTH`] or more stones of its color. Only the four lines through
//! that stone are scanned. The result depends on nothing but the board
//! contents and the coordinate.

use crate::games::gomoku::{Cell, GomokuBoard};
use crate::WIN_LENGTH;

/// One of the four line directions through a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Along a row
    Horizontal,
    /// Along a column
    Vertical,
    /// Top-left to bottom-right (`\`)
    Diagonal,
    /// Bottom-left to top-right (`/`)
    AntiDiagonal,
}

impl Orientation {
    /// Scan order
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::Diagonal,
        Orientation::AntiDiagonal,
    ];

    /// The pair of opposite unit steps `(dcol, drow)` defining this orientation
    pub fn steps(self) -> [(i32, i32); 2] {
        match self {
            Orientation::Horizontal => [(1, 0), (-1, 0)],
            Orientation::Vertical => [(0, 1), (0, -1)],
            Orientation::Diagonal => [(1, 1), (-1, -1)],
            Orientation::AntiDiagonal => [(1, -1), (-1, 1)],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
            Orientation::Diagonal => "diagonal",
            Orientation::AntiDiagonal => "anti-diagonal",
        }
    }
}

/// Length of the run of same-colored stones through `(col, row)` along
/// `orientation`, counting the stone itself.
///
/// Returns 0 if the coordinate is empty or off the board.
pub fn run_length(board: &GomokuBoard, col: i32, row: i32, orientation: Orientation) -> usize {
    let cell = match board.cell_at(col, row) {
        Ok(cell) if !cell.is_empty() => cell,
        _ => return 0,
    };

    let mut count = 1;
    for (dc, dr) in orientation.steps() {
        count += count_in_direction(board, col, row, dc, dr, cell);
    }
    count
}

/// Walks away from `(col, row)` one step at a time while the cells hold
/// `cell`. Leaving the board stops the walk.
fn count_in_direction(board: &GomokuBoard, col: i32, row: i32, dc: i32, dr: i32, cell: Cell) -> usize {
    let mut count = 0;
    let (mut c, mut r) = (col + dc, row + dr);
    while board.cell_at(c, r) == Ok(cell) {
        count += 1;
        c += dc;
        r += dr;
    }
    count
}

/// Returns the first orientation (in [`Orientation::ALL`] order) whose run
/// through `(col, row)` reaches [`WIN_LENGTH`]. Longer runs also count.
pub fn find_winning_orientation(board: &GomokuBoard, col: i32, row: i32) -> Option<Orientation> {
    Orientation::ALL
        .into_iter()
        .find(|&orientation| run_length(board, col, row, orientation) >= WIN_LENGTH)
}

/// Whether the stone at `(col, row)` completes a winning line
pub fn is_winning_placement(board: &GomokuBoard, col: i32, row: i32) -> bool {
    find_winning_orientation(board, col, row).is_some()
}
