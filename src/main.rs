//! Wordle Narrow - CLI
//!
//! Filters a dictionary by known positions, known letters and known
//! non-letters, then suggests next guesses.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use wordle_narrow::{
    commands::{SuggestConfig, letter_frequencies, suggest},
    core::{Constraints, Word},
    output::{print_frequency_report, print_suggest_result},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_narrow",
    about = "Narrow a Wordle dictionary by known letters and suggest next guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    word_list: String,

    /// Correct letters in their correct positions, '_' for unknown positions
    #[arg(short = 'p', long, global = true, default_value = "_____")]
    known_positions: String,

    /// Letters known to be in the word, position unknown (order doesn't matter)
    #[arg(short = 'l', long, global = true, default_value = "")]
    known_letters: String,

    /// Letters known NOT to be in the word
    #[arg(short = 'n', long, global = true, default_value = "")]
    known_nonletters: String,

    /// Strategy: frequency (default) or random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Seed for the random strategy
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the dictionary and suggest next guesses (default)
    Suggest,

    /// Show how often each letter appears in the dictionary
    Frequencies,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Load the word list named by the -w flag
fn load_word_list(word_list: &str) -> Result<Vec<Word>> {
    match word_list {
        "embedded" => {
            let words = words_from_slice(WORDS);
            log::info!("Using embedded dictionary of {} words", words.len());
            Ok(words)
        }
        path => load_from_file(path)
            .with_context(|| format!("Failed to read word list '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Suggest);

    match command {
        Commands::Suggest => {
            // Validate before touching the word list
            let constraints = Constraints::parse(
                &cli.known_positions,
                &cli.known_letters,
                &cli.known_nonletters,
            )
            .context("Invalid constraints")?;
            let config = SuggestConfig::new(constraints).with_strategy(cli.strategy, cli.seed);

            let words = load_word_list(&cli.word_list)?;
            let result = suggest(&words, &config);
            print_suggest_result(&result);
        }
        Commands::Frequencies => {
            let words = load_word_list(&cli.word_list)?;
            print_frequency_report(&letter_frequencies(&words));
        }
    }

    Ok(())
}
