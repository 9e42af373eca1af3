//! Tic-tac-toe CLI entry point.

use anyhow::Result;
use clap::Parser;
use tictactoe::{Cli, Command, Config, LogTarget, eval, init_logging, play_moves, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or_default() {
        Command::Play { no_hints } => {
            init_logging(&config, LogTarget::File)?;
            info!(version = env!("CARGO_PKG_VERSION"), "Starting tictactoe");
            run_tui(&config, *config.show_hints() && !no_hints)
        }
        Command::Eval { board, json } => {
            init_logging(&config, LogTarget::Stderr)?;
            println!("{}", eval(&board, json)?);
            Ok(())
        }
        Command::Moves { positions, json } => {
            init_logging(&config, LogTarget::Stderr)?;
            println!("{}", play_moves(&positions, json)?);
            Ok(())
        }
    }
}
