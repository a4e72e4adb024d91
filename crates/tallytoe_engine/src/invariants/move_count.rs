//! Move count invariant: the counter matches the board and the history.

use super::super::Game;
use super::Invariant;

/// Invariant: `move_count` equals the occupied cells and the history length,
/// and never exceeds N².
pub struct MoveCountInvariant;

impl Invariant<Game> for MoveCountInvariant {
    fn holds(game: &Game) -> bool {
        let count = game.move_count();
        count == game.board().occupied()
            && count == game.history().len()
            && count <= game.size().cell_count()
    }

    fn description() -> &'static str {
        "Move count matches occupied cells and history length"
    }
}
