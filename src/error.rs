//! # Error Types
//!
//! Every failure the game core can report is local and recoverable. Placement
//! errors are returned to the caller as values; the board is never touched
//! when one is produced.

use crate::BOARD_SIZE;
use std::time::Duration;

/// Reasons a placement (or a cell query) is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("({col}, {row}) is outside the {size}x{size} board", size = BOARD_SIZE)]
    OutOfBounds { col: i32, row: i32 },

    #[error("({col}, {row}) is already occupied")]
    CellOccupied { col: i32, row: i32 },

    #[error("the game is already over")]
    GameAlreadyOver,
}

/// Errors that can occur when building the presentation configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("announce delay {0:?} exceeds the maximum of {1:?}")]
    AnnounceDelayTooLong(Duration, Duration),
}
