mod command;
mod config;
mod render;
mod runner;

use clap::Parser;
use tictactoe_engine::{Difficulty, SessionRng, TicTacToeSession, log, logger};

use runner::ConsoleRunner;

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// Skip the difficulty prompt: easy, medium or hard.
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Path to the YAML config file.
    #[arg(long)]
    config: Option<String>,

    /// Seed for the session's random choices.
    #[arg(long)]
    seed: Option<u64>,

    /// Print engine log lines.
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = config::get_config_manager(args.config.as_deref()).get_config()?;

    if args.verbose {
        let prefix = if args.use_log_prefix {
            Some(config.log_prefix.clone().unwrap_or_else(|| "Console".to_string()))
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let mut game_config = config.game;
    if args.difficulty.is_some() {
        game_config.default_difficulty = args.difficulty;
    }

    let rng = match args.seed.or(game_config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting console session with seed {}", rng.seed());

    let session = TicTacToeSession::new("console", rng);
    ConsoleRunner::new(session, game_config).run().await?;

    Ok(())
}
