//! # Gomoku
//!
//! Two-player five-in-a-row on a 15x15 grid.
//!
//! The library is split into the game core and the presentation shells that
//! drive it:
//! - [`games`]: the board state and the win detector
//! - [`game_controller`]: the move protocol tying them together
//! - [`app`], [`tui`], [`cli`]: terminal front ends that translate input into
//!   placements and render the results
//!
//! The core holds no global state. Every game is an owned
//! [`GameController`](game_controller::GameController), so several games can
//! live side by side and tests can build boards directly.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod game_controller;
pub mod games;
pub mod tui;

/// Width and height of the board
pub const BOARD_SIZE: usize = 15;

/// Stones in a row needed to win. Longer runs win too.
pub const WIN_LENGTH: usize = 5;

pub use error::PlacementError;
pub use game_controller::{GameController, MoveResult};
pub use games::gomoku::{Cell, Color, GameStatus, GomokuBoard, GomokuMove};
