//! The puzzle board: grid state, move mechanics, and the solved predicate.

use std::{fmt, ops::Index};

use crate::{Direction, Position};

/// The reserved tile value marking the blank cell.
pub const BLANK: u8 = 0;

/// Side length of the classic 15-puzzle board.
pub const CLASSIC_SIZE: u8 = 4;

/// Largest supported board side length.
///
/// Tile values are stored as `u8`, so the side length is capped at 15
/// (`15² - 1 = 224` distinct tiles).
pub const MAX_SIZE: u8 = 15;

/// A square sliding-tile board.
///
/// The grid is stored row-major: cell `(row, col)` holds a tile value in `0..size²`,
/// where [`BLANK`] marks the single empty cell. The blank's coordinates are cached
/// alongside the grid for O(1) access; every mutating operation keeps the cache and
/// the grid in sync.
///
/// A board starts in the solved configuration and is mutated in place by
/// [`apply_move`](Self::apply_move) for the lifetime of one game. Shuffling goes
/// through the primitive [`slide_blank`](Self::slide_blank) swap instead.
///
/// # Example
///
/// ```
/// use fifteen_core::{Board, Position};
///
/// let mut board = Board::solved(4);
/// assert_eq!(board.blank(), Position::new(3, 3));
/// assert_eq!(board[Position::new(0, 0)], 1);
///
/// board.apply_move(Position::new(3, 1)).unwrap();
/// assert_eq!(board.blank(), Position::new(3, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<u8>,
    blank: Position,
}

/// Result of a move request: whether the board actually changed.
///
/// Targeting the blank's own cell or a cell sharing neither row nor column with the
/// blank is a deliberate no-op, reported as [`Ignored`](Self::Ignored) rather than an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveOutcome {
    /// The move was legal and non-trivial; tiles shifted and the blank relocated.
    Moved,
    /// The move was a no-op; the board is unchanged.
    Ignored,
}

/// Errors from board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The move request names a cell outside the grid.
    #[display("target {position} is outside the {size}x{size} board")]
    OutOfBounds {
        /// The rejected target cell.
        position: Position,
        /// The board's side length.
        size: u8,
    },
}

impl Board {
    /// Creates a board in the canonical solved configuration.
    ///
    /// Cell `(i, j)` holds `i * size + j + 1`, except the bottom-right cell, which
    /// holds [`BLANK`].
    ///
    /// # Panics
    ///
    /// Panics if `size` is not in the range `2..=MAX_SIZE`.
    #[must_use]
    pub fn solved(size: u8) -> Self {
        assert!(
            (2..=MAX_SIZE).contains(&size),
            "board size must be in 2..={MAX_SIZE}, got {size}"
        );
        let len = usize::from(size) * usize::from(size);
        let mut cells = vec![BLANK; len];
        let mut value: u8 = 1;
        for cell in &mut cells[..len - 1] {
            *cell = value;
            value += 1;
        }
        Self {
            size,
            cells,
            blank: Position::new(size - 1, size - 1),
        }
    }

    /// Restores the solved configuration in place.
    pub fn reset(&mut self) {
        *self = Self::solved(self.size);
    }

    /// Returns the board's side length.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns the cached coordinates of the blank cell.
    #[must_use]
    pub fn blank(&self) -> Position {
        self.blank
    }

    /// Returns the tile values in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[u8] {
        &self.cells
    }

    /// Returns an iterator over the board's rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(usize::from(self.size))
    }

    /// Returns the tile value at `position`, or `None` if it is out of bounds.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<u8> {
        self.contains(position)
            .then(|| self.cells[self.idx(position)])
    }

    /// Returns whether `position` lies on the board.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.size && position.col < self.size
    }

    fn idx(&self, position: Position) -> usize {
        usize::from(position.row) * usize::from(self.size) + usize::from(position.col)
    }

    /// Applies a player move targeting `target`.
    ///
    /// The move is legal iff `target` shares a row or a column with the blank. Every
    /// tile between the target and the blank (inclusive of the target) then shifts one
    /// slot toward the blank's old cell, and the blank relocates to the target. A
    /// single call can move several tiles at once - the run-shifting mechanic that
    /// distinguishes this variant from the single-tile 15-puzzle.
    ///
    /// Targeting the blank itself or an unaligned cell leaves the board untouched and
    /// returns [`MoveOutcome::Ignored`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `target` is outside the grid; the board
    /// is untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use fifteen_core::{Board, MoveOutcome, Position};
    ///
    /// let mut board = Board::solved(4);
    /// // Bottom row is [13, 14, 15, .]; targeting (3, 0) shifts the whole run right.
    /// assert_eq!(
    ///     board.apply_move(Position::new(3, 0)),
    ///     Ok(MoveOutcome::Moved)
    /// );
    /// assert_eq!(board.rows().nth(3).unwrap(), &[0, 13, 14, 15]);
    /// ```
    pub fn apply_move(&mut self, target: Position) -> Result<MoveOutcome, BoardError> {
        if !self.contains(target) {
            return Err(BoardError::OutOfBounds {
                position: target,
                size: self.size,
            });
        }
        let blank = self.blank;
        if target == blank {
            return Ok(MoveOutcome::Ignored);
        }

        if target.row == blank.row {
            let row = target.row;
            if target.col < blank.col {
                for col in (target.col + 1..=blank.col).rev() {
                    let to = self.idx(Position::new(row, col));
                    let from = self.idx(Position::new(row, col - 1));
                    self.cells[to] = self.cells[from];
                }
            } else {
                for col in blank.col..target.col {
                    let to = self.idx(Position::new(row, col));
                    let from = self.idx(Position::new(row, col + 1));
                    self.cells[to] = self.cells[from];
                }
            }
        } else if target.col == blank.col {
            let col = target.col;
            if target.row < blank.row {
                for row in (target.row + 1..=blank.row).rev() {
                    let to = self.idx(Position::new(row, col));
                    let from = self.idx(Position::new(row - 1, col));
                    self.cells[to] = self.cells[from];
                }
            } else {
                for row in blank.row..target.row {
                    let to = self.idx(Position::new(row, col));
                    let from = self.idx(Position::new(row + 1, col));
                    self.cells[to] = self.cells[from];
                }
            }
        } else {
            return Ok(MoveOutcome::Ignored);
        }

        let target_idx = self.idx(target);
        self.cells[target_idx] = BLANK;
        self.blank = target;
        Ok(MoveOutcome::Moved)
    }

    /// Swaps the blank with its orthogonal neighbor in `direction`.
    ///
    /// This is the primitive single-cell swap used by shuffling. It does not route
    /// through [`apply_move`](Self::apply_move) and never shifts more than one tile.
    /// Returns `false` without touching the board when the neighbor is out of bounds.
    pub fn slide_blank(&mut self, direction: Direction) -> bool {
        let Some(neighbor) = self.blank.step(direction, self.size) else {
            return false;
        };
        let blank_idx = self.idx(self.blank);
        let neighbor_idx = self.idx(neighbor);
        self.cells.swap(blank_idx, neighbor_idx);
        self.blank = neighbor;
        true
    }

    /// Checks whether the board is in the solved configuration.
    ///
    /// True iff, scanning row-major, cell `k` (zero-based) holds `k + 1` for every
    /// cell but the last, and the last cell holds [`BLANK`]. Pure read, no side
    /// effects.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let last = self.cells.len() - 1;
        self.cells[last] == BLANK
            && self.cells[..last]
                .iter()
                .enumerate()
                .all(|(k, &tile)| usize::from(tile) == k + 1)
    }
}

impl Index<Position> for Board {
    type Output = u8;

    fn index(&self, position: Position) -> &Self::Output {
        assert!(
            self.contains(position),
            "position {position} is outside the {size}x{size} board",
            size = self.size
        );
        &self.cells[self.idx(position)]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max_tile = usize::from(self.size) * usize::from(self.size) - 1;
        let width = max_tile.to_string().len();
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &tile) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                if tile == BLANK {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{tile:>width$}")?;
                }
            }
        }
        Ok(())
    }
}
