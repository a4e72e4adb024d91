//! Game state machine for N x N tic-tac-toe.

use super::action::{MoveError, Placement};
use super::board::Board;
use super::invariants::{GameInvariants, InvariantSet};
use super::tally::{Line, LineTallies};
use super::types::{BoardSize, Cell, Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Result of evaluating the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No line is complete and empty cells remain.
    Ongoing,
    /// A player completed a line.
    Win,
    /// Every cell is occupied and no line is complete.
    Draw,
}

impl GameStatus {
    /// Returns true for `Win` and `Draw`.
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

/// Tic-tac-toe engine on a square board of any size.
///
/// Owns the grid together with per-line tallies, so deciding whether the game
/// is over costs O(N) instead of a full board scan. All mutation goes through
/// [`Game::place_mark`]; a rejected move never changes any field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) tallies: LineTallies,
    pub(crate) current_player: Player,
    pub(crate) last_mover: Option<Player>,
    pub(crate) move_count: usize,
    pub(crate) won: bool,
    pub(crate) history: Vec<Placement>,
}

impl Game {
    /// Creates a new game with an empty board and [`Player::FIRST`] to move.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        debug!("Creating new board");
        Self {
            board: Board::new(size),
            tallies: LineTallies::new(size),
            current_player: Player::FIRST,
            last_mover: None,
            move_count: 0,
            won: false,
            history: Vec::new(),
        }
    }

    /// Replaces the whole state with a fresh game of the same size.
    #[instrument(skip(self), fields(size = %self.size()))]
    pub fn reset(&mut self) {
        *self = Self::new(self.size());
    }

    /// Builds a game by placing each coordinate in turn.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] raised by [`Game::place_mark`].
    #[instrument(skip(coords), fields(moves = coords.len()))]
    pub fn replay(size: BoardSize, coords: &[Coord]) -> Result<Self, MoveError> {
        let mut game = Self::new(size);
        for &coord in coords {
            game.place_mark(coord)?;
        }
        Ok(game)
    }

    /// Returns the board's side length.
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the line tallies.
    pub fn tallies(&self) -> &LineTallies {
        &self.tallies
    }

    /// Returns the player to move next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the player who made the most recent successful placement.
    pub fn last_mover(&self) -> Option<Player> {
        self.last_mover
    }

    /// Number of marks placed since the game started.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// True once [`Game::is_game_over`] has reported a win.
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Every successful placement, oldest first.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Returns the mark at a cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if the coordinate is off the board.
    pub fn get(&self, coord: Coord) -> Result<Cell, MoveError> {
        self.board.get(coord).ok_or(MoveError::OutOfBounds {
            coord,
            size: self.size(),
        })
    }

    /// Places the current player's mark at `coord`.
    ///
    /// On success the tallies for the affected lines are updated, the move is
    /// recorded and the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if the coordinate is off the board.
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark.
    /// - [`MoveError::GameOver`] if a line is complete or the board is full.
    ///
    /// A rejected move leaves the game exactly as it was.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place_mark(&mut self, coord: Coord) -> Result<Placement, MoveError> {
        if !self.size().contains(coord) {
            warn!("Coordinate off the board");
            return Err(MoveError::OutOfBounds {
                coord,
                size: self.size(),
            });
        }

        // Occupancy before game over, so an occupied cell reports the same
        // error whether or not the game has ended.
        if !self.board.is_empty(coord) {
            debug!("Cell already occupied");
            return Err(MoveError::CellOccupied(coord));
        }

        if self.status().is_over() {
            warn!("Move attempted after game ended");
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        self.board.set(coord, Cell::Occupied(player));
        self.tallies.record(coord, player);
        self.move_count += 1;
        self.last_mover = Some(player);

        let placement = Placement::new(player, coord);
        self.history.push(placement);
        self.change_player();

        debug_assert!(
            GameInvariants::check_all(&*self).is_ok(),
            "Game invariants violated after {}",
            placement
        );

        debug!(move_count = self.move_count, "Mark placed");
        Ok(placement)
    }

    /// Evaluates the board: win first, then draw, otherwise ongoing.
    ///
    /// Records the win so that [`Game::is_won`] stays true until reset.
    #[instrument(skip(self), fields(move_count = self.move_count))]
    pub fn is_game_over(&mut self) -> GameStatus {
        let status = self.status();
        match status {
            GameStatus::Win => {
                self.won = true;
                info!(winner = ?self.last_mover, line = ?self.winning_line(), "Game won");
            }
            GameStatus::Draw => info!("Game drawn"),
            GameStatus::Ongoing => {}
        }
        status
    }

    /// Evaluates the board without recording anything.
    pub fn status(&self) -> GameStatus {
        if self.winning_line().is_some() {
            GameStatus::Win
        } else if self.move_count == self.size().cell_count() {
            GameStatus::Draw
        } else {
            GameStatus::Ongoing
        }
    }

    /// Returns the completed line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        self.tallies.completed_line()
    }

    /// Returns the winner: the player who moved last, once a line is complete.
    pub fn winner(&self) -> Option<Player> {
        self.winning_line().and(self.last_mover)
    }

    fn change_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}
