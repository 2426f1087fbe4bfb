//! Grid coordinates and orthogonal directions.

/// Coordinates of a single cell on the board.
///
/// `row` and `col` are zero-based; `(0, 0)` is the top-left corner. A `Position` knows
/// nothing about board bounds on its own - bounds are checked against a board side
/// length (see [`Position::step`] and [`Board::apply_move`]).
///
/// [`Board::apply_move`]: crate::Board::apply_move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Position {
    /// Row index (zero-based, top to bottom).
    pub row: u8,
    /// Column index (zero-based, left to right).
    pub col: u8,
}

impl Position {
    /// Creates a new position from row and column indices.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the neighbor one step in `direction`, or `None` if that step leaves a
    /// square board of side `size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fifteen_core::{Direction, Position};
    ///
    /// let corner = Position::new(3, 3);
    /// assert_eq!(corner.step(Direction::Up, 4), Some(Position::new(2, 3)));
    /// assert_eq!(corner.step(Direction::Down, 4), None);
    /// assert_eq!(corner.step(Direction::Right, 4), None);
    /// ```
    #[must_use]
    pub fn step(self, direction: Direction, size: u8) -> Option<Self> {
        let (row, col) = match direction {
            Direction::Up => (self.row.checked_sub(1)?, self.col),
            Direction::Down => (self.row.checked_add(1)?, self.col),
            Direction::Left => (self.row, self.col.checked_sub(1)?),
            Direction::Right => (self.row, self.col.checked_add(1)?),
        };
        (row < size && col < size).then_some(Self { row, col })
    }
}

/// An orthogonal step direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Away from row 0.
    Down,
    /// Toward column 0.
    Left,
    /// Away from column 0.
    Right,
}

impl Direction {
    /// Array containing all four directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the direction that undoes a step in this direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
