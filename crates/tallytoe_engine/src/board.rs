//! Square grid storage.

use super::types::{BoardSize, Cell, Coord};
use serde::Serialize;

/// N x N board of cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a new empty board.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// Returns the side length.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Gets the cell at the given coordinate, or `None` if it is off the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Sets the cell at the given coordinate.
    ///
    /// Returns `false` and leaves the board unchanged when the coordinate is
    /// off the board.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Checks if a cell is empty. Off-board coordinates are never empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Iterates over one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        let n = self.size.get();
        self.cells.iter().skip(row * n).take(n).copied()
    }

    /// Iterates over all cells with their coordinates in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let n = self.size.get();
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Coord::new(i / n, i % n), *cell))
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.size
            .contains(coord)
            .then(|| coord.row * self.size.get() + coord.col)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}
