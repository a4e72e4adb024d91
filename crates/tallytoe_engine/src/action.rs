//! Placement events and move errors.

use super::types::{BoardSize, Coord, Player};
use serde::{Deserialize, Serialize};

/// A successful placement: a player's mark landing on a cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{} takes {}", player, coord)]
pub struct Placement {
    /// The player who moved.
    pub player: Player,
    /// Where the mark was placed.
    pub coord: Coord,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(player: Player, coord: Coord) -> Self {
        Self { player, coord }
    }
}

/// Error that can occur when reading or placing at a coordinate.
///
/// Every variant leaves the game untouched; callers may retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// The coordinate is outside the board.
    #[display("Coordinate {} is outside a {}x{} board", coord, size, size)]
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// The board's side length.
        size: BoardSize,
    },

    /// The game already has a result.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
