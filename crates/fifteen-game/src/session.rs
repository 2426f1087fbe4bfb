use std::time::{Duration, Instant};

use fifteen_core::{Board, BoardError, MoveOutcome, Position};
use fifteen_shuffle::{BoardShuffler, ShuffleSeed, ShuffledBoard};
use log::{debug, info};

/// Lifecycle phase of a game session, for driving external timers and dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionStatus {
    /// No counted move has been made yet.
    Ready,
    /// At least one move counted, puzzle not yet solved.
    Running,
    /// The puzzle reached the solved configuration.
    Solved,
}

/// Result of a submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// Whether the board actually changed.
    pub outcome: MoveOutcome,
    /// Player move count after this request.
    pub move_count: u32,
    /// Whether the board is now in the solved configuration.
    pub solved: bool,
}

/// A single-player fifteen-puzzle game session.
///
/// Owns one [`Board`] for the lifetime of a game. Moves are counted only when the
/// board reports [`MoveOutcome::Moved`]; ignored requests (unaligned targets or the
/// blank's own cell) never change the count. The clock starts at the first counted
/// move and stops when the puzzle is solved.
///
/// # Example
///
/// ```
/// use fifteen_core::Position;
/// use fifteen_game::GameSession;
/// use fifteen_shuffle::BoardShuffler;
///
/// // A zero-step shuffle leaves the board solved; one move away and back solves it.
/// let mut session = GameSession::new(BoardShuffler::new(4).steps(0).shuffle());
/// session.submit_move(Position::new(3, 0)).unwrap();
/// let report = session.submit_move(Position::new(3, 3)).unwrap();
/// assert!(report.solved);
/// assert_eq!(report.move_count, 2);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    seed: ShuffleSeed,
    move_count: u32,
    started_at: Option<Instant>,
    solved_at: Option<Instant>,
}

impl GameSession {
    /// Creates a session from a shuffled board with the move counter at zero.
    ///
    /// Shuffle swaps are not player moves, so the counter always starts fresh
    /// regardless of how the board was randomized.
    #[must_use]
    pub fn new(shuffled: ShuffledBoard) -> Self {
        let ShuffledBoard { board, seed } = shuffled;
        debug!("new game: size {}, seed {seed}", board.size());
        Self {
            board,
            seed,
            move_count: 0,
            started_at: None,
            solved_at: None,
        }
    }

    /// Starts a new game on a freshly shuffled board of side `size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is outside [`Board::solved`]'s supported range.
    #[must_use]
    pub fn start(size: u8) -> Self {
        Self::new(BoardShuffler::new(size).shuffle())
    }

    /// Replaces the board with a freshly shuffled one of the same size.
    ///
    /// The old board is discarded wholesale; the move counter and clocks reset.
    pub fn restart(&mut self) {
        *self = Self::new(BoardShuffler::new(self.board.size()).shuffle());
    }

    /// Submits a player move targeting `target`.
    ///
    /// This is the only interaction point for player input. The move counter
    /// increments by exactly one iff the board reports [`MoveOutcome::Moved`]. The
    /// first counted move starts the session clock; reaching the solved configuration
    /// stops it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `target` is outside the grid; the
    /// session is untouched.
    pub fn submit_move(&mut self, target: Position) -> Result<MoveReport, BoardError> {
        let outcome = self.board.apply_move(target)?;
        if outcome.is_moved() {
            if self.started_at.is_none() {
                self.started_at = Some(Instant::now());
            }
            self.move_count += 1;
            if self.board.is_solved() {
                self.solved_at = Some(Instant::now());
                info!(
                    "puzzle solved in {} moves, {:.2?}",
                    self.move_count,
                    self.elapsed()
                );
            } else {
                // A move out of an already-solved state reopens the clock.
                self.solved_at = None;
            }
        }
        Ok(MoveReport {
            outcome,
            move_count: self.move_count,
            solved: self.board.is_solved(),
        })
    }

    /// Returns a read-only snapshot of the board for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the seed that produced this game's board.
    #[must_use]
    pub fn seed(&self) -> ShuffleSeed {
        self.seed
    }

    /// Returns the number of counted player moves.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns whether the board is in the solved configuration.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Returns the session's lifecycle phase.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.solved_at.is_some() {
            SessionStatus::Solved
        } else if self.started_at.is_some() {
            SessionStatus::Running
        } else {
            SessionStatus::Ready
        }
    }

    /// Returns the time from the first counted move to the solve, or to now while the
    /// game is still running. Zero before the first counted move.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match (self.started_at, self.solved_at) {
            (Some(start), Some(end)) => end.duration_since(start),
            (Some(start), None) => start.elapsed(),
            (None, _) => Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use fifteen_core::BLANK;

    use super::*;

    fn solved_session() -> GameSession {
        GameSession::new(BoardShuffler::new(4).steps(0).shuffle())
    }

    #[test]
    fn test_counted_row_move() {
        // Spec example 1, through the session surface.
        let mut session = solved_session();
        let report = session.submit_move(Position::new(3, 0)).unwrap();
        assert_eq!(report.outcome, MoveOutcome::Moved);
        assert_eq!(report.move_count, 1);
        assert!(!report.solved);
        assert_eq!(session.board().rows().nth(3).unwrap(), &[0, 13, 14, 15]);
    }

    #[test]
    fn test_unaligned_move_not_counted() {
        // Spec example 2: blank at (3, 0), target (1, 1) is a soft no-op.
        let mut session = solved_session();
        session.submit_move(Position::new(3, 0)).unwrap();
        let before = session.board().clone();
        let report = session.submit_move(Position::new(1, 1)).unwrap();
        assert_eq!(report.outcome, MoveOutcome::Ignored);
        assert_eq!(report.move_count, 1);
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn test_blank_target_not_counted() {
        // Spec example 3.
        let mut session = solved_session();
        let report = session.submit_move(Position::new(3, 3)).unwrap();
        assert_eq!(report.outcome, MoveOutcome::Ignored);
        assert_eq!(report.move_count, 0);
        assert!(report.solved);
    }

    #[test]
    fn test_out_of_bounds_rejected_without_mutation() {
        let mut session = solved_session();
        let before = session.board().clone();
        let err = session.submit_move(Position::new(9, 9)).unwrap_err();
        assert!(matches!(err, BoardError::OutOfBounds { .. }));
        assert_eq!(session.board(), &before);
        assert_eq!(session.move_count(), 0);
        assert!(session.status().is_ready());
    }

    #[test]
    fn test_solve_reports_and_status() {
        let mut session = solved_session();
        assert!(session.status().is_ready());

        session.submit_move(Position::new(3, 0)).unwrap();
        assert!(session.status().is_running());

        let report = session.submit_move(Position::new(3, 3)).unwrap();
        assert!(report.solved);
        assert_eq!(report.move_count, 2);
        assert!(session.status().is_solved());
        assert!(session.is_solved());
    }

    #[test]
    fn test_move_after_solve_reopens_clock() {
        let mut session = solved_session();
        session.submit_move(Position::new(3, 0)).unwrap();
        session.submit_move(Position::new(3, 3)).unwrap();
        assert!(session.status().is_solved());

        session.submit_move(Position::new(3, 0)).unwrap();
        assert!(session.status().is_running());
        assert!(!session.is_solved());
    }

    #[test]
    fn test_restart_replaces_board_and_resets_counter() {
        let mut session = solved_session();
        session.submit_move(Position::new(3, 0)).unwrap();
        assert_eq!(session.move_count(), 1);

        session.restart();
        assert_eq!(session.move_count(), 0);
        assert!(session.status().is_ready());
        assert_eq!(session.elapsed(), Duration::ZERO);
        assert_eq!(session.board().size(), 4);
    }

    #[test]
    fn test_start_shuffles_with_counter_at_zero() {
        let session = GameSession::start(4);
        assert_eq!(session.move_count(), 0);
        assert!(session.status().is_ready());
        let blanks = session
            .board()
            .tiles()
            .iter()
            .filter(|&&tile| tile == BLANK)
            .count();
        assert_eq!(blanks, 1);
    }

    #[test]
    fn test_elapsed_zero_before_first_move() {
        let mut session = solved_session();
        assert_eq!(session.elapsed(), Duration::ZERO);
        // Ignored requests do not start the clock.
        session.submit_move(Position::new(3, 3)).unwrap();
        assert_eq!(session.elapsed(), Duration::ZERO);
    }
}
