//! Core data structures for the fifteen sliding-tile puzzle.
//!
//! This crate provides the board representation and move mechanics shared by the
//! shuffling and game-session crates.
//!
//! # Overview
//!
//! The crate is organized around two main concepts:
//!
//! 1. **Coordinates** - Grid addressing types
//!    - [`position`]: Cell coordinates ([`Position`]) and orthogonal steps ([`Direction`]).
//!
//! 2. **Board** - The puzzle state and its transition function
//!    - [`board`]: The [`Board`] grid with its cached blank position, the run-shifting
//!      move operation, the solved-state predicate, and the primitive blank swap used
//!      by shuffling.
//!
//! A board of side `N` holds tile values `1..N²` plus the reserved [`BLANK`] sentinel
//! (`0`) in exactly one cell. A player move targets a cell sharing a row or column with
//! the blank; every tile between the target and the blank shifts one slot toward the
//! blank's old cell in a single atomic operation.
//!
//! # Examples
//!
//! ```
//! use fifteen_core::{Board, MoveOutcome, Position};
//!
//! let mut board = Board::solved(4);
//! assert!(board.is_solved());
//!
//! // Slide the whole bottom row toward the blank corner.
//! let outcome = board.apply_move(Position::new(3, 0)).unwrap();
//! assert_eq!(outcome, MoveOutcome::Moved);
//! assert_eq!(board.blank(), Position::new(3, 0));
//! assert!(!board.is_solved());
//! ```

pub mod board;
pub mod position;

pub use self::{
    board::{BLANK, Board, BoardError, CLASSIC_SIZE, MAX_SIZE, MoveOutcome},
    position::{Direction, Position},
};
