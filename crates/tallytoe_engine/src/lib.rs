//! Tic-tac-toe engine for square boards of any size.
//!
//! Players alternately claim cells on an N x N grid. The game is won by the
//! first player to fill a whole row, column, diagonal or anti-diagonal, and
//! drawn when the board fills without a complete line.
//!
//! Win detection is incremental: each line keeps a signed tally that moves
//! by ±1 per mark, so a line is complete exactly when its tally reaches ±N.
//!
//! # Example
//!
//! ```
//! use tallytoe_engine::{BoardSize, Coord, Game, GameStatus, Player};
//!
//! let mut game = Game::new(BoardSize::CLASSIC);
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     game.place_mark(Coord::new(row, col)).unwrap();
//! }
//! assert_eq!(game.is_game_over(), GameStatus::Win);
//! assert_eq!(game.winner(), Some(Player::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod game;
pub mod invariants;
mod tally;
mod types;

pub use action::{MoveError, Placement};
pub use board::Board;
pub use game::{Game, GameStatus};
pub use tally::{Line, LineTallies};
pub use types::{BoardSize, Cell, Coord, Player, SizeError};
