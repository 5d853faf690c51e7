//! Hangman - CLI
//!
//! Hangman with TUI and simple line modes, hints and a challenge-a-friend flow.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_simple,
    core::{DEFAULT_HINTS, FIGURE_PARTS, GameConfig, SecretWord},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time, with hints and a challenge-a-friend mode",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Newline-delimited word list for games against the computer (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for word and hint selection, for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Wrong guesses allowed before the game is lost
    #[arg(
        short = 'm',
        long,
        global = true,
        default_value_t = FIGURE_PARTS,
        value_parser = clap::value_parser!(u8).range(1..=i64::from(FIGURE_PARTS))
    )]
    max_wrong: u8,

    /// Hints available per game
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_HINTS,
        value_parser = clap::value_parser!(u8).range(0..=i64::from(DEFAULT_HINTS))
    )]
    hints: u8,

    /// Write log output to this file instead of stderr (level set with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// Load the word list selected by the -w flag
fn load_words(wordlist: Option<&PathBuf>) -> Result<Vec<SecretWord>> {
    let words = match wordlist {
        Some(path) => load_from_file(path)
            .with_context(|| format!("cannot read word list {}", path.display()))?,
        None => words_from_slice(WORDS),
    };

    if words.is_empty() {
        bail!("word list contains no valid words");
    }
    info!("loaded {} words", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let words = load_words(cli.wordlist.as_ref())?;
    let config = GameConfig::new(cli.max_wrong, cli.hints);
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&words, config, rng),
        Commands::Simple => run_simple_command(&words, config, rng),
    }
}

fn run_play_command(words: &[SecretWord], config: GameConfig, rng: StdRng) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(words, config, rng);
    let stats = run_tui(app)?;
    hangman::output::print_statistics(&stats);
    Ok(())
}

fn run_simple_command(words: &[SecretWord], config: GameConfig, mut rng: StdRng) -> Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    run_simple(&mut reader, words, config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
