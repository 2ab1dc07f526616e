use std::path::PathBuf;

use clap::Parser;
use nz_trivia::{builtin_corpus, TriviaGame};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from (defaults to the built-in
    /// New Zealand corpus)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Seed for the question picker, for reproducible sessions
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let game = match args.questions {
        Some(path) => TriviaGame::from_json(path, args.seed),
        None => TriviaGame::new(builtin_corpus(), args.seed),
    };

    let game = match game {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Failed to start game: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = game.run() {
        eprintln!("Error running game: {}", e);
        std::process::exit(1);
    }
}
