mod config;
mod ui;

use std::io;

use clap::Parser;
use common::logger::{self, LogTarget};
use common::{Difficulty, Session, SessionRng, log};

use config::get_config_manager;

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    /// easy, medium or impossible; asked interactively when not set here or in config
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write engine log lines to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(args.config.as_deref()).get_config()?;

    let prefix = if args.use_log_prefix {
        Some(config.log_prefix.clone().unwrap_or_else(|| "Console".to_string()))
    } else {
        None
    };
    let target = if args.verbose {
        LogTarget::Stderr
    } else {
        LogTarget::Disabled
    };
    logger::init_logger(prefix, target);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let difficulty = match args.difficulty.or(config.difficulty) {
        Some(difficulty) => difficulty,
        None => match ui::prompt_difficulty(&mut input, &mut output)? {
            Some(difficulty) => difficulty,
            None => return Ok(()),
        },
    };

    let rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let mut session = Session::with_rng(difficulty, rng);
    let outcome = ui::run_game(&mut session, &mut input, &mut output)?;
    log!("Session with seed {} ended: {:?}", session.seed(), outcome);

    Ok(())
}
