mod config;
mod controller;
mod input;
mod render;
mod runner;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tictactoe_engine::SessionRng;
use tictactoe_engine::config::ConfigManager;
use tictactoe_engine::log;
use tictactoe_engine::logger::{self, LogTarget};
use tictactoe_engine::tictactoe::Difficulty;

use config::{OpponentType, get_config_manager};
use controller::GameController;

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Tic-tac-toe against a friend or a minimax AI")]
struct Args {
    /// Who plays O
    #[arg(long, value_enum)]
    opponent: Option<OpponentType>,

    /// AI difficulty: easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seed for the AI's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Config file path (defaults to a file next to the executable)
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Store the effective settings in the config file
    #[arg(long)]
    save_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => get_config_manager(),
    };
    let mut cfg = config_manager.get_config()?;

    if let Some(opponent) = args.opponent {
        cfg.opponent = opponent;
    }
    if let Some(difficulty) = args.difficulty {
        cfg.difficulty = difficulty;
    }
    if args.save_config {
        config_manager.set_config(&cfg)?;
    }

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    let target = match &cfg.log_file {
        Some(path) => LogTarget::File(PathBuf::from(path)),
        None => LogTarget::Stderr,
    };
    logger::init_logger(prefix, target)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log!(
        "Starting game: opponent={:?}, difficulty={}, seed={}",
        cfg.opponent,
        cfg.difficulty,
        seed
    );

    let controller = GameController::new(
        cfg.opponent,
        cfg.difficulty,
        cfg.bot,
        SessionRng::new(seed),
    );
    runner::run_console_game(controller, Duration::from_millis(cfg.ai_delay_ms)).await?;

    log!("Console closed");
    Ok(())
}
