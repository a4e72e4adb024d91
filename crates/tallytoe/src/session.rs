//! Top-level game loop between two players sharing one console.

use crate::console::{Console, SessionError};
use std::io::{BufRead, Write};
use tallytoe_engine::{BoardSize, Game, GameStatus, MoveError};
use tracing::{info, instrument, warn};

/// One game played through a console.
#[derive(Debug)]
pub struct Session<R, W> {
    game: Game,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with a fresh board.
    pub fn new(size: BoardSize, console: Console<R, W>) -> Self {
        Self {
            game: Game::new(size),
            console,
        }
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the session and returns the console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Plays until the board reports a win or a draw, then announces it.
    #[instrument(skip(self), fields(size = %self.game.size()))]
    pub fn run(&mut self) -> Result<GameStatus, SessionError> {
        info!("Starting game");
        self.console.show_board(self.game.board())?;

        loop {
            let status = self.game.is_game_over();
            if status.is_over() {
                self.announce(status)?;
                return Ok(status);
            }
            self.play_turn()?;
        }
    }

    /// Requests one move and applies it, re-rendering on an occupied cell.
    fn play_turn(&mut self) -> Result<(), SessionError> {
        let player = self.game.current_player();
        self.console.say(format_args!("Your move {}:", player))?;

        let coord = self.console.request_coord(self.game.size())?;
        match self.game.place_mark(coord) {
            Ok(placement) => {
                self.console.say(placement)?;
                self.console.show_board(self.game.board())?;
            }
            Err(MoveError::CellOccupied(_)) => {
                self.console.say("Invalid move!")?;
                self.console.show_board(self.game.board())?;
            }
            Err(err) => {
                warn!(%err, "Engine rejected a validated coordinate");
                return Err(SessionError::Move(err));
            }
        }
        Ok(())
    }

    fn announce(&mut self, status: GameStatus) -> Result<(), SessionError> {
        match (status, self.game.winner()) {
            (GameStatus::Win, Some(winner)) => {
                info!(%winner, "Announcing winner");
                self.console.say(format_args!("--- {} WINS! ---", winner))
            }
            _ => {
                info!("Announcing draw");
                self.console.say("--- DRAW ---")
            }
        }
    }
}
