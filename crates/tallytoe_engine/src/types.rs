//! Core domain types for the board engine.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player O (goes first).
    O,
    /// Player X (goes second).
    X,
}

impl Player {
    /// The player who opens every game.
    pub const FIRST: Player = Player::O;

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }

    /// Signed weight of this player's marks in a line tally.
    pub(crate) fn tally_value(self) -> isize {
        match self {
            Player::O => 1,
            Player::X => -1,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub(crate) fn tally_value(self) -> isize {
        self.player().map_or(0, Player::tally_value)
    }
}

/// A (row, column) coordinate on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({},{})", row, col)]
pub struct Coord {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Coord {
    /// Creates a new coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Side length of a square board. Always at least 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// The classic 3x3 board.
    pub const CLASSIC: BoardSize = BoardSize(3);

    /// Largest accepted side length.
    pub const MAX: BoardSize = BoardSize(1024);

    /// Creates a board size, rejecting zero and anything above [`BoardSize::MAX`].
    pub fn new(size: usize) -> Result<Self, SizeError> {
        if size == 0 {
            return Err(SizeError::Zero);
        }
        if size > Self::MAX.0 || size.checked_mul(size).is_none() {
            return Err(SizeError::TooLarge(size));
        }
        Ok(Self(size))
    }

    /// Returns the side length.
    pub fn get(self) -> usize {
        self.0
    }

    /// Total number of cells (N²).
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }

    /// Checks whether a coordinate lies on the board.
    pub fn contains(self, coord: Coord) -> bool {
        coord.row < self.0 && coord.col < self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = SizeError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// Error constructing a [`BoardSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SizeError {
    /// A board needs at least one row and column.
    #[display("Board size must be at least 1")]
    Zero,
    /// The board would not fit in memory or on screen.
    #[display("Board size {} exceeds the maximum of {}", _0, BoardSize::MAX)]
    TooLarge(usize),
}

impl std::error::Error for SizeError {}
