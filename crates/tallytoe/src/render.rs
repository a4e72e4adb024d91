//! Plain-text board rendering.

use std::fmt;
use tallytoe_engine::{Board, Cell, Coord};

/// Display adapter drawing a board with row/column indices and borders.
///
/// ```text
///
///      0   1   2
///    +---+---+---+
/// 0  | O |   |   |
///    +---+---+---+
/// ```
pub struct BoardView<'a>(pub &'a Board);

impl BoardView<'_> {
    fn border(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n   +")?;
        for _ in 0..self.0.size().get() {
            write!(f, "---+")?;
        }
        Ok(())
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0.size().get();

        write!(f, "\n    ")?;
        for col in 0..n {
            write!(f, " {}  ", col)?;
        }
        self.border(f)?;

        for row in 0..n {
            write!(f, "\n{}  |", row)?;
            for col in 0..n {
                match self.0.get(Coord::new(row, col)) {
                    Some(Cell::Occupied(player)) => write!(f, " {} |", player)?,
                    _ => write!(f, "   |")?,
                }
            }
            self.border(f)?;
        }

        write!(f, "\n\n")
    }
}
