//! Command-line interface for tallytoe.

use clap::Parser;
use std::path::PathBuf;

/// Tallytoe - two-player tic-tac-toe on an N x N board
#[derive(Parser, Debug)]
#[command(name = "tallytoe")]
#[command(about = "Two-player console tic-tac-toe on a square board of any size", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length (overrides the config file)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
