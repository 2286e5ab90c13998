//! # Game Implementation Module
//!
//! The Gomoku rules, split in two pieces:
//! - [`gomoku`]: board occupancy, the turn flag and the game status
//! - [`win_detector`]: the run-length scan that decides whether a placement wins
//!
//! Neither piece knows about the other's callers. The
//! [`GameController`](crate::game_controller::GameController) wires them together.

pub mod gomoku;
pub mod win_detector;
