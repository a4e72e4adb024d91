//! Alternating turn invariant: players alternate O, X, O, X, ...

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// History must start with [`Player::FIRST`] and never repeat a player.
/// The player to move is `FIRST` exactly when an even number of marks has
/// been placed, and the last mover is the author of the last history entry.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != Player::FIRST
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected_next = if game.move_count() % 2 == 0 {
            Player::FIRST
        } else {
            Player::FIRST.opponent()
        };

        game.current_player() == expected_next
            && game.last_mover() == history.last().map(|p| p.player)
    }

    fn description() -> &'static str {
        "Players alternate turns starting with O"
    }
}
