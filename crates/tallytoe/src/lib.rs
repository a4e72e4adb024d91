//! Console driver for the tallytoe engine.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line override for the board size
//! - **Console**: token input with re-prompting, prompts and board output
//! - **Session**: the game loop tying one [`tallytoe_engine::Game`] to a console
//!
//! Input and output are generic over [`std::io::BufRead`] and
//! [`std::io::Write`], so a whole game can be driven from a string.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tallytoe::{Console, Session};
//! use tallytoe_engine::{BoardSize, GameStatus};
//!
//! let moves = "0 0  1 1  0 1  1 0  0 2";
//! let console = Console::new(Cursor::new(moves), Vec::new());
//! let mut session = Session::new(BoardSize::CLASSIC, console);
//! assert_eq!(session.run().unwrap(), GameStatus::Win);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod input;
mod render;
mod session;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use console::{Axis, Console, SessionError};
pub use input::{InputError, TokenReader, parse_index};
pub use render::BoardView;
pub use session::Session;
