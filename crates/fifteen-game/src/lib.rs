//! Game session management for the fifteen puzzle.
//!
//! A [`GameSession`] owns exactly one shuffled [`Board`](fifteen_core::Board) per
//! game, counts player moves, tracks elapsed time from the first counted move to the
//! solve, and reports the solved state after every move. Starting a new game replaces
//! the board wholesale; there is no partial reset or undo.
//!
//! The session is the engine's only interaction point for player input: a
//! presentation layer submits `(row, col)` move requests and renders the returned
//! snapshot. How moves are gathered and how time is displayed (for instance via a
//! periodic timer reading [`GameSession::elapsed`]) stays outside this crate.
//!
//! # Example
//!
//! ```
//! use fifteen_core::Position;
//! use fifteen_game::GameSession;
//!
//! let mut session = GameSession::start(4);
//! let report = session.submit_move(Position::new(0, 0)).unwrap();
//! if report.solved {
//!     println!("solved in {} moves", report.move_count);
//! }
//! ```

mod session;

pub use self::session::{GameSession, MoveReport, SessionStatus};
