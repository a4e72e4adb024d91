//! Property tests for the tally-based engine.
//!
//! Random move sequences on random board sizes, checking after every step:
//! - each tally equals the signed sum recomputed from the grid,
//! - rejected moves leave the game untouched,
//! - the turn alternates only on success,
//! - the tally verdict agrees with a brute-force line scan.

use proptest::prelude::*;
use tallytoe_engine::invariants::{GameInvariants, InvariantSet};
use tallytoe_engine::{BoardSize, Cell, Coord, Game, GameStatus, MoveError, Player};

/// Scans every line of the grid directly, without tallies.
fn brute_force_winner(game: &Game) -> Option<Player> {
    let n = game.size().get();
    let cell = |row: usize, col: usize| game.get(Coord::new(row, col)).unwrap();

    let mut lines: Vec<Vec<Cell>> = Vec::new();
    for i in 0..n {
        lines.push((0..n).map(|j| cell(i, j)).collect());
        lines.push((0..n).map(|j| cell(j, i)).collect());
    }
    lines.push((0..n).map(|i| cell(i, i)).collect());
    lines.push((0..n).map(|i| cell(i, n - 1 - i)).collect());

    lines.into_iter().find_map(|line| {
        let first = line[0].player()?;
        line.iter()
            .all(|c| *c == Cell::Occupied(first))
            .then_some(first)
    })
}

fn signed_sum(cells: impl Iterator<Item = Cell>) -> isize {
    cells
        .map(|c| match c {
            Cell::Empty => 0,
            Cell::Occupied(Player::O) => 1,
            Cell::Occupied(Player::X) => -1,
        })
        .sum()
}

fn moves_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..=6).prop_flat_map(|n| {
        let coord = (0..n + 1, 0..n + 1);
        (Just(n), prop::collection::vec(coord, 0..64))
    })
}

proptest! {
    #[test]
    fn tallies_match_grid_after_any_sequence((n, moves) in moves_strategy()) {
        let mut game = Game::new(BoardSize::new(n).unwrap());

        for (row, col) in moves {
            let before = game.clone();
            let to_move = game.current_player();

            match game.place_mark(Coord::new(row, col)) {
                Ok(placement) => {
                    prop_assert_eq!(placement.player, to_move);
                    prop_assert_eq!(game.current_player(), to_move.opponent());
                    prop_assert_eq!(game.move_count(), before.move_count() + 1);
                }
                Err(MoveError::OutOfBounds { .. }) => {
                    prop_assert!(row >= n || col >= n);
                    prop_assert_eq!(&game, &before);
                }
                Err(MoveError::CellOccupied(_)) => {
                    prop_assert!(!before.get(Coord::new(row, col)).unwrap().is_empty());
                    prop_assert_eq!(&game, &before);
                }
                Err(MoveError::GameOver) => {
                    prop_assert!(before.status().is_over());
                    prop_assert!(before.get(Coord::new(row, col)).unwrap().is_empty());
                    prop_assert_eq!(&game, &before);
                }
            }

            prop_assert!(GameInvariants::check_all(&game).is_ok());

            for i in 0..n {
                prop_assert_eq!(game.tallies().row(i), Some(signed_sum(game.board().row(i))));
                let column = (0..n).map(|r| game.get(Coord::new(r, i)).unwrap());
                prop_assert_eq!(game.tallies().col(i), Some(signed_sum(column)));
            }

            let status = game.is_game_over();
            let expected_winner = brute_force_winner(&game);
            prop_assert_eq!(game.winner(), expected_winner);
            prop_assert_eq!(status == GameStatus::Win, expected_winner.is_some());
            if status == GameStatus::Draw {
                prop_assert_eq!(game.move_count(), n * n);
            }
        }
    }
}
