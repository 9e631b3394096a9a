use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::games::tictactoe::{ComputerPlayer, GameController, HumanPlayer};

#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe in the terminal against a random-move opponent")]
#[command(version)]
pub struct Cli {
    /// Seed for the computer's moves (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Name shown for the human player
    #[arg(long, default_value = "You")]
    pub name: String,

    /// Write logs to this file. The terminal belongs to the UI, so without
    /// it nothing is logged.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print the final game as JSON after quitting
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Human plays X, the computer plays O
    pub fn build_controller(&self) -> GameController {
        let computer = match self.seed {
            Some(seed) => ComputerPlayer::with_seed("CPU", seed),
            None => ComputerPlayer::new("CPU"),
        };
        GameController::new(Box::new(HumanPlayer::new(self.name.clone())), Box::new(computer))
    }

    /// Installs the file logger if one was requested
    pub fn init_tracing(&self) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };
        let file = File::create(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.log_level))
            .with_context(|| format!("Invalid log filter '{}'", self.log_level))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
        Ok(())
    }
}
