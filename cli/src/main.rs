use std::io;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use mineboard_core::GameSession;

mod args;
mod command;
mod game;
mod render;

fn main() -> anyhow::Result<()> {
    let args = args::Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let difficulty = args
        .starting_difficulty()
        .context("Invalid custom difficulty")?;
    let session = GameSession::with_seed(difficulty, seed)?;

    println!("{}", command::HELP);
    game::Terminal::new(session, args.json).run(io::stdin().lock(), io::stdout().lock(), Utc::now)
}
