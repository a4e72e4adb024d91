//! Token input and coordinate validation.

use std::collections::VecDeque;
use std::io::BufRead;
use tallytoe_engine::BoardSize;

/// Error turning a raw token into a board index.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// The token is not a 32-bit integer.
    #[display("'{}' is not a number", _0)]
    NotANumber(String),

    /// The integer is outside `[0, size)`.
    #[display("{} is outside [0-{}]", value, max)]
    OutOfRange {
        /// The integer that was read.
        value: i32,
        /// Largest valid index.
        max: usize,
    },
}

impl std::error::Error for InputError {}

/// Parses a token as a zero-based index on a board of the given size.
pub fn parse_index(token: &str, size: BoardSize) -> Result<usize, InputError> {
    let value: i32 = token
        .trim()
        .parse()
        .map_err(|_| InputError::NotANumber(token.to_string()))?;

    let max = size.get() - 1;
    usize::try_from(value)
        .ok()
        .filter(|&index| index <= max)
        .ok_or(InputError::OutOfRange { value, max })
}

/// Splits a reader into whitespace-separated tokens, reading a line at a time.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}
