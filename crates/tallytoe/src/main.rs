//! Tallytoe - console tic-tac-toe on an N x N board.

use anyhow::{Context, Result};
use clap::Parser;
use tallytoe::{Cli, Console, GameConfig, Session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

#[instrument(skip_all)]
fn run(cli: Cli) -> Result<()> {
    let config = GameConfig::resolve(cli.config.as_deref(), cli.size)
        .context("Failed to load configuration")?;
    info!(board_size = %config.board_size(), "Configuration resolved");

    let stdin = std::io::stdin();
    let console = Console::new(stdin.lock(), std::io::stdout());
    let mut session = Session::new(*config.board_size(), console);

    let status = session.run().context("Game aborted")?;
    info!(?status, moves = session.game().move_count(), "Game finished");
    Ok(())
}
