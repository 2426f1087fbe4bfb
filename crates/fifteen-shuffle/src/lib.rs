//! Randomized board shuffling for the fifteen puzzle.
//!
//! Shuffling performs a bounded random walk of primitive blank swaps starting from the
//! solved configuration. Because every step is a reversible single-cell swap of the
//! blank with an orthogonal neighbor, the resulting permutation stays in the solved
//! state's parity class - every shuffled board is solvable by construction.
//!
//! Randomness is injected: [`scramble`] takes any [`rand::Rng`], and [`BoardShuffler`]
//! drives a deterministic [`rand_pcg::Pcg64`] from a [`ShuffleSeed`], so shuffle
//! outcomes are reproducible in tests and benchmarks.
//!
//! # Examples
//!
//! ```
//! use fifteen_shuffle::BoardShuffler;
//!
//! let shuffled = BoardShuffler::new(4).shuffle();
//! println!("seed: {}", shuffled.seed);
//! println!("{}", shuffled.board);
//! ```

use fifteen_core::{Board, Direction};
use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;

pub use self::seed::{ParseSeedError, ShuffleSeed};

mod seed;

/// Default random-walk budget, matching the classic 1000-swap shuffle.
pub const DEFAULT_SHUFFLE_STEPS: u32 = 1000;

/// Generates randomized, solvable boards via a seeded random walk.
///
/// # Example
///
/// ```
/// use fifteen_shuffle::{BoardShuffler, ShuffleSeed};
///
/// let shuffler = BoardShuffler::new(4);
/// let seed: ShuffleSeed =
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
///         .parse()
///         .unwrap();
/// let first = shuffler.shuffle_with_seed(seed);
/// let second = shuffler.shuffle_with_seed(seed);
/// assert_eq!(first.board, second.board);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardShuffler {
    size: u8,
    steps: u32,
}

impl BoardShuffler {
    /// Creates a shuffler for boards of side `size` with the default step budget.
    #[must_use]
    pub fn new(size: u8) -> Self {
        Self {
            size,
            steps: DEFAULT_SHUFFLE_STEPS,
        }
    }

    /// Sets the random-walk step budget.
    ///
    /// A budget of `0` yields an already-solved board, which is accepted rather than
    /// an error.
    #[must_use]
    pub fn steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Shuffles a fresh solved board with a random seed.
    ///
    /// # Panics
    ///
    /// Panics if the configured size is outside [`Board::solved`]'s supported range.
    #[must_use]
    pub fn shuffle(&self) -> ShuffledBoard {
        self.shuffle_with_seed(ShuffleSeed::random())
    }

    /// Shuffles a fresh solved board deterministically from `seed`.
    ///
    /// # Panics
    ///
    /// Panics if the configured size is outside [`Board::solved`]'s supported range.
    #[must_use]
    pub fn shuffle_with_seed(&self, seed: ShuffleSeed) -> ShuffledBoard {
        let mut board = Board::solved(self.size);
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        scramble(&mut board, self.steps, &mut rng);
        ShuffledBoard { board, seed }
    }
}

/// A shuffled board together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffledBoard {
    /// The randomized board.
    pub board: Board,
    /// Seed that reproduces this board for the same size and step budget.
    pub seed: ShuffleSeed,
}

/// Performs `steps` random blank swaps on `board`.
///
/// Each iteration picks one of the four directions uniformly at random and applies
/// [`Board::slide_blank`]. Out-of-bounds picks are skipped but still consume the step
/// budget, so the walk always terminates after exactly `steps` iterations. No check is
/// made that the walk did not wander back to the solved state.
///
/// Shuffle swaps are not player moves; any move counter belongs to the caller and
/// stays untouched here.
pub fn scramble<R: Rng + ?Sized>(board: &mut Board, steps: u32, rng: &mut R) {
    for _ in 0..steps {
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        board.slide_blank(direction);
    }
}
