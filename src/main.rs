//! Spelling Bee - CLI
//!
//! Play rounds of Spelling Bee in the terminal, or inspect boards.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spelling_bee::{
    commands::{PlayOptions, run_generate, run_play, run_solve},
    dictionary::Dictionary,
    logging::setup_logging,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Build words from a honeycomb of seven letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in dictionary)
    #[arg(short, long, global = true, env = "SPELLING_BEE_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Don't clear the terminal between turns
    #[arg(long, global = true)]
    no_clear: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all log output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default)
    Play,

    /// Print a random board
    Generate {
        /// Also print the pangram the board was built from
        #[arg(short, long)]
        reveal: bool,
    },

    /// List every word a board accepts
    Solve {
        /// The center letter
        center: String,

        /// The six surrounding letters, e.g. WRMING
        others: String,
    },
}

/// Load the dictionary named by `--dictionary`, or the built-in one
fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    match path {
        Some(path) => Dictionary::load(path)
            .with_context(|| format!("could not load dictionary {}", path.display())),
        None => Ok(Dictionary::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let dictionary = load_dictionary(cli.dictionary.as_deref())?;
    tracing::debug!(
        words = dictionary.len(),
        pangrams = dictionary.pangram_count(),
        "dictionary ready"
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let options = PlayOptions {
                clear_screen: !cli.no_clear,
            };
            let report = run_play(&dictionary, options)?;
            tracing::info!(
                rounds = report.rounds,
                words = report.words_found,
                points = report.points,
                "session finished"
            );
            Ok(())
        }
        Commands::Generate { reveal } => run_generate(&dictionary, reveal),
        Commands::Solve { center, others } => run_solve(&dictionary, &center, &others),
    }
}
