//! Evil Hangman - CLI
//!
//! Non-interactive driver for the adversarial hangman engine. Dictionaries and letters
//! are passed on the command line.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use evil_hangman::{
    commands::{preview_families, replay_letters},
    config::{DEFAULT_MAX_GUESSES, GameConfig},
    logging::init_logging,
    output::{print_families_result, print_replay_result},
};

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman opponent that keeps the largest family of words alive",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Settings shared by every command
#[derive(Args)]
struct GameArgs {
    /// Word length; other dictionary words are ignored
    #[arg(short, long, allow_negative_numbers = true)]
    length: i64,

    /// Number of missed letters allowed
    #[arg(short, long, default_value_t = DEFAULT_MAX_GUESSES, allow_negative_numbers = true)]
    guesses: i64,

    /// Dictionary words
    #[arg(required = true)]
    words: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess a fixed sequence of letters and show every step
    Replay {
        #[command(flatten)]
        game: GameArgs,

        /// Letters to guess, in order (e.g. "etaoin")
        #[arg(short = 'L', long)]
        letters: String,

        /// Show candidate counts and the remaining words
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a letter would split the candidates
    Families {
        #[command(flatten)]
        game: GameArgs,

        /// Letters to guess first, in order
        #[arg(short = 'L', long, default_value = "")]
        letters: String,

        /// Letter to preview
        #[arg(short, long)]
        probe: char,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            game,
            letters,
            verbose,
        } => run_replay_command(game, &letters, verbose),
        Commands::Families {
            game,
            letters,
            probe,
        } => run_families_command(game, &letters, probe),
    }
}

fn game_config(game: &GameArgs) -> Result<GameConfig> {
    GameConfig::new(game.length, game.guesses).context("invalid game settings")
}

fn parse_letters(letters: &str) -> Result<Vec<char>> {
    let parsed: Vec<char> = letters.chars().filter(|c| !c.is_whitespace()).collect();
    if parsed.is_empty() && !letters.is_empty() {
        bail!("no letters in {letters:?}");
    }
    Ok(parsed)
}

fn run_replay_command(game: GameArgs, letters: &str, verbose: bool) -> Result<()> {
    let config = game_config(&game)?;
    let letters = parse_letters(letters)?;

    let result = replay_letters(config, game.words, &letters)?;
    print_replay_result(&result, verbose);
    Ok(())
}

fn run_families_command(game: GameArgs, letters: &str, probe: char) -> Result<()> {
    let config = game_config(&game)?;
    let letters = parse_letters(letters)?;

    let result = preview_families(config, game.words, &letters, probe)
        .with_context(|| format!("cannot preview '{probe}'"))?;
    print_families_result(&result);
    Ok(())
}
