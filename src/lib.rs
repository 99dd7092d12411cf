//! A time-bounded agent for playing 'Four in a Line' on an 8x8 board
//!
//! Pieces may be placed on any empty cell, and the first player to own four
//! cells in an unbroken row or column wins. The agent uses iterative deepening
//! minimax with alpha-beta pruning, stopping at a wall-clock deadline.
//!
//! # Basic Usage
//!
//! ```
//! use four_in_line::{board::{Board, Move, Player}, solver::Solver};
//! use std::time::Duration;
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new();
//! board.play_checked("A1".parse()?, Player::Computer)?;
//! board.play_checked("A2".parse()?, Player::Computer)?;
//! board.play_checked("A3".parse()?, Player::Computer)?;
//!
//! let mut solver = Solver::new(Duration::from_secs(1)).with_max_depth(2);
//! let chosen = solver.make_move(&mut board);
//!
//! assert_eq!(chosen, Some(Move::new(0, 3)));
//! assert_eq!(chosen.unwrap().to_string(), "A4");
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod config;

pub mod error;

pub mod evaluation;

pub mod game;

pub mod solver;


/// The width and height of the square game board in cells
pub const BOARD_SIZE: usize = 8;

/// The number of aligned cells needed to win
pub const LINE_LENGTH: usize = 4;

/// The deepest iteration the deepening driver will attempt
pub const MAX_DEPTH: usize = 10;

// a line must fit on the board, and moves are written as one letter plus one digit
const_assert!(LINE_LENGTH <= BOARD_SIZE);
const_assert!(BOARD_SIZE <= 9);
