//! Console collaborator: prompts, re-prompting input, board output.

use crate::input::{InputError, TokenReader, parse_index};
use crate::render::BoardView;
use std::io::{BufRead, Write};
use tallytoe_engine::{Board, BoardSize, Coord};
use tracing::{debug, instrument};

/// Errors that end a console session.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[display("Console I/O failed: {}", _0)]
    #[from]
    Io(#[error(source)] std::io::Error),

    /// Input ended before the game finished.
    #[display("Input closed before the game finished")]
    InputClosed,

    /// The engine rejected a move the driver should have prevented.
    #[display("Engine rejected move: {}", _0)]
    Move(#[error(source)] tallytoe_engine::MoveError),
}

/// Which half of a coordinate is being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Axis {
    /// Row index.
    #[display("row")]
    Row,
    /// Column index.
    #[display("column")]
    Column,
}

/// Reads tokens from `R` and writes prompts and boards to `W`.
#[derive(Debug)]
pub struct Console<R, W> {
    tokens: TokenReader<R>,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over an input reader and an output writer.
    pub fn new(input: R, out: W) -> Self {
        Self {
            tokens: TokenReader::new(input),
            out,
        }
    }

    /// Writes a full line.
    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<(), SessionError> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    /// Draws the board.
    pub fn show_board(&mut self, board: &Board) -> Result<(), SessionError> {
        write!(self.out, "{}", BoardView(board))?;
        self.out.flush()?;
        Ok(())
    }

    /// Prompts until a valid index in `[0, size)` is entered.
    ///
    /// Non-numeric tokens print a warning; out-of-range numbers just prompt
    /// again.
    #[instrument(skip(self))]
    pub fn request_index(&mut self, axis: Axis, size: BoardSize) -> Result<usize, SessionError> {
        loop {
            write!(
                self.out,
                "Enter a {} number from [0-{}]: ",
                axis,
                size.get() - 1
            )?;
            self.out.flush()?;

            let token = self.tokens.next_token()?.ok_or(SessionError::InputClosed)?;
            match parse_index(&token, size) {
                Ok(index) => return Ok(index),
                Err(err @ InputError::NotANumber(_)) => {
                    debug!(%err, "Rejected input");
                    writeln!(self.out, "Not valid input, please try again!")?;
                }
                Err(err @ InputError::OutOfRange { .. }) => {
                    debug!(%err, "Rejected input");
                }
            }
        }
    }

    /// Prompts for a row, then a column.
    pub fn request_coord(&mut self, size: BoardSize) -> Result<Coord, SessionError> {
        let row = self.request_index(Axis::Row, size)?;
        let col = self.request_index(Axis::Column, size)?;
        Ok(Coord::new(row, col))
    }

    /// Consumes the console and returns the output writer.
    pub fn into_output(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<String>, Vec<u8>> {
        Console::new(Cursor::new(input.to_string()), Vec::new())
    }

    fn output(console: Console<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_valid_coordinate() {
        let mut console = console("1\n2\n");
        assert_eq!(console.request_coord(BoardSize::CLASSIC).unwrap(), Coord::new(1, 2));
        assert_eq!(
            output(console),
            "Enter a row number from [0-2]: Enter a column number from [0-2]: "
        );
    }

    #[test]
    fn test_reprompts_on_garbage() {
        let mut console = console("abc 1\n");
        assert_eq!(console.request_index(Axis::Row, BoardSize::CLASSIC).unwrap(), 1);
        assert_eq!(
            output(console),
            "Enter a row number from [0-2]: Not valid input, please try again!\n\
             Enter a row number from [0-2]: "
        );
    }

    #[test]
    fn test_reprompts_on_overflowing_number() {
        let mut console = console("3000000000\n2\n");
        assert_eq!(console.request_index(Axis::Row, BoardSize::CLASSIC).unwrap(), 2);
        assert_eq!(
            output(console)
                .matches("Not valid input, please try again!")
                .count(),
            1
        );
    }

    #[test]
    fn test_io_error_converts_to_session_error() {
        let err = SessionError::from(std::io::Error::other("pipe closed"));
        assert!(matches!(err, SessionError::Io(_)));
        assert_eq!(err.to_string(), "Console I/O failed: pipe closed");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_reprompts_silently_out_of_range() {
        let mut console = console("7 -1 0");
        assert_eq!(console.request_index(Axis::Column, BoardSize::CLASSIC).unwrap(), 0);
        assert_eq!(output(console).matches("Enter a column number").count(), 3);
    }

    #[test]
    fn test_end_of_input() {
        let mut console = console("x\n");
        let result = console.request_index(Axis::Row, BoardSize::CLASSIC);
        assert!(matches!(result, Err(SessionError::InputClosed)));
    }
}
