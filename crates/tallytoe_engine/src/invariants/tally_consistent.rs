//! Tally consistency invariant: every line tally matches the grid.

use super::super::{Coord, Game};
use super::Invariant;

/// Invariant: Each tally equals the signed sum of its line's cells.
///
/// Recomputes every row, column and diagonal from the board and compares
/// against the incrementally maintained tallies.
pub struct TallyConsistentInvariant;

impl Invariant<Game> for TallyConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let n = game.size().get();
        let value = |row: usize, col: usize| {
            game.board()
                .get(Coord::new(row, col))
                .map_or(0, |cell| cell.tally_value())
        };

        let tallies = game.tallies();
        let lines_match = (0..n).all(|i| {
            let row_sum: isize = (0..n).map(|j| value(i, j)).sum();
            let col_sum: isize = (0..n).map(|j| value(j, i)).sum();
            tallies.row(i) == Some(row_sum) && tallies.col(i) == Some(col_sum)
        });

        let diag: isize = (0..n).map(|i| value(i, i)).sum();
        let anti_diag: isize = (0..n).map(|i| value(i, n - 1 - i)).sum();

        lines_match && tallies.diag() == diag && tallies.anti_diag() == anti_diag
    }

    fn description() -> &'static str {
        "Line tallies equal the signed sums recomputed from the grid"
    }
}
