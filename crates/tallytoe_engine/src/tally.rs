//! Incremental line tallies for O(N) win detection.
//!
//! Every row, column and the two diagonals keep a signed running sum of the
//! marks placed on them: +1 for each `O`, -1 for each `X`. A line is complete
//! exactly when the absolute value of its tally reaches the board size, so a
//! win check never has to rescan the grid.

use super::types::{BoardSize, Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A line that can be completed to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Line {
    /// A row, by index.
    #[display("row {}", _0)]
    Row(usize),
    /// A column, by index.
    #[display("column {}", _0)]
    Column(usize),
    /// The main diagonal (`row == col`).
    #[display("diagonal")]
    Diagonal,
    /// The anti-diagonal (`row + col == N - 1`).
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// Signed accumulators for every line on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineTallies {
    size: BoardSize,
    rows: Vec<isize>,
    cols: Vec<isize>,
    diag: isize,
    anti_diag: isize,
}

impl LineTallies {
    /// Creates all-zero tallies for a board of the given size.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            rows: vec![0; size.get()],
            cols: vec![0; size.get()],
            diag: 0,
            anti_diag: 0,
        }
    }

    /// Records a mark placed by `player` at `coord`.
    ///
    /// The centre of an odd board lies on both diagonals and updates both.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn record(&mut self, coord: Coord, player: Player) {
        let value = player.tally_value();
        self.rows[coord.row] += value;
        self.cols[coord.col] += value;

        if coord.row == coord.col {
            self.diag += value;
        }

        if coord.row + coord.col == self.size.get() - 1 {
            self.anti_diag += value;
        }
    }

    /// Returns the first complete line: rows, then columns, then the diagonal,
    /// then the anti-diagonal.
    pub fn completed_line(&self) -> Option<Line> {
        let target = self.size.get() as isize;
        let complete = |tally: isize| tally.abs() == target;

        if let Some(i) = self.rows.iter().position(|&t| complete(t)) {
            return Some(Line::Row(i));
        }
        if let Some(j) = self.cols.iter().position(|&t| complete(t)) {
            return Some(Line::Column(j));
        }
        if complete(self.diag) {
            return Some(Line::Diagonal);
        }
        if complete(self.anti_diag) {
            return Some(Line::AntiDiagonal);
        }
        None
    }

    /// Tally of a row, or `None` for an off-board index.
    pub fn row(&self, row: usize) -> Option<isize> {
        self.rows.get(row).copied()
    }

    /// Tally of a column, or `None` for an off-board index.
    pub fn col(&self, col: usize) -> Option<isize> {
        self.cols.get(col).copied()
    }

    /// Tally of the main diagonal.
    pub fn diag(&self) -> isize {
        self.diag
    }

    /// Tally of the anti-diagonal.
    pub fn anti_diag(&self) -> isize {
        self.anti_diag
    }
}
