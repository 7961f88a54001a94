//! Hangman - CLI
//!
//! Console hangman with TUI and simple CLI modes plus a computer player.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{AutoplayOptions, run_autoplay, run_play},
    core::Difficulty,
    game::GameSession,
    interactive::{App, run_tui},
    output::print_autoplay_report,
    wordlists::{WordCollection, loader::builtin_collection},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Console hangman with a 30-letter German alphabet and a frequency-based computer player",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Add words from a newline-delimited file (repeatable)
    #[arg(short = 'f', long = "file", global = true)]
    files: Vec<PathBuf>,

    /// Add a single word (repeatable)
    #[arg(short = 'w', long = "word", global = true)]
    words: Vec<String>,

    /// Skip the builtin word list
    #[arg(long, global = true)]
    no_builtin: bool,

    /// Seed the random word selection for reproducible runs
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Let the computer play on its own
    Auto {
        /// Difficulty level (1-6)
        #[arg(short = 'l', long, default_value = "3")]
        level: u8,

        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1")]
        rounds: usize,
    },
}

/// Build the word collection from the builtin list, files and -w words
fn build_collection(cli: &Cli) -> WordCollection {
    let mut collection = if cli.no_builtin {
        WordCollection::new()
    } else {
        builtin_collection()
    };

    for path in &cli.files {
        match collection.add_file(path) {
            Ok(added) => println!("Loaded {added} words from {}", path.display()),
            Err(e) => eprintln!("Skipping {}: {e}", path.display()),
        }
    }

    for word in &cli.words {
        if collection.add(word).is_err() {
            eprintln!("Skipping invalid word '{word}'");
        }
    }

    collection
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let collection = build_collection(&cli);
    let mut session = match cli.seed {
        Some(seed) => GameSession::with_seed(collection, seed),
        None => GameSession::new(collection),
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(session)),
        Commands::Simple => run_play(&mut session).map_err(|e| anyhow::anyhow!(e)),
        Commands::Auto { level, rounds } => {
            let Some(difficulty) = Difficulty::from_level(level) else {
                bail!("Difficulty level must be between 1 and 6, got {level}");
            };

            let options = AutoplayOptions {
                difficulty,
                rounds,
                trace: rounds == 1,
            };
            let report = run_autoplay(&mut session, &options)
                .context("Autoplay needs at least one word")?;
            print_autoplay_report(&report);
            Ok(())
        }
    }
}
