use std::io;

use anyhow::Result;
use clap::Parser;
use minesweeper_core::{Board, Difficulty, ShuffledLayout};

mod game;
mod prompt;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Difficulty to play (easy, medium or hard), asked for when missing
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("seed: {:?}", args.seed);

    let mut prompter = prompt::Prompter::new(io::stdin().lock(), io::stdout().lock());
    let difficulty = match args.difficulty {
        Some(difficulty) => difficulty,
        None => prompter.difficulty()?,
    };
    log::info!("Starting {} game", difficulty);

    let mut board = match args.seed {
        Some(seed) => Board::generate(ShuffledLayout::from_seed(seed), difficulty.config())?,
        None => Board::new(difficulty),
    };

    let status = game::play(&mut prompter, &mut board)?;
    log::info!("Game finished: {:?}", status);
    Ok(())
}
