//! Anti-Wordle - CLI
//!
//! Play Anti-Wordle in the terminal, or score a single guess.

use anti_wordle::{
    commands::{run_play, score_guess},
    core::Word,
    game::GuessEngine,
    logging,
    output::print_score_result,
    wordlists::{ScriptedSource, WordList, WordSource, loader::load_from_file},
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;

#[derive(Parser)]
#[command(
    name = "anti_wordle",
    about = "Anti-Wordle: survive five guesses without finding the hidden word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for picking hidden words (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Use this hidden word instead of a random one
        #[arg(long)]
        hidden: Option<String>,
    },

    /// Show the feedback a guess would get against a hidden word
    Score {
        /// The hidden word
        hidden: String,

        /// The guess to score
        guess: String,
    },
}

/// Load the word list selected by the -w flag
fn load_words(wordlist: &str) -> Result<Vec<Word>> {
    use anti_wordle::wordlists::{WORDS, loader::words_from_slice};

    match wordlist {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("Failed to read word list {path}")),
    }
}

/// Pick the hidden-word source: a fixed word if one was given, else random
fn build_source(
    words: Vec<Word>,
    hidden: Option<&str>,
    seed: Option<u64>,
) -> Result<Box<dyn WordSource>> {
    let source: Box<dyn WordSource> = match hidden {
        Some(text) => {
            let word = Word::new(text).with_context(|| format!("Invalid hidden word '{text}'"))?;
            Box::new(ScriptedSource::new(words, vec![word])?)
        }
        None => match seed {
            Some(seed) => Box::new(WordList::with_seed(words, seed)?),
            None => Box::new(WordList::new(words)?),
        },
    };
    log::info!("Word list ready: {} words", source.all_words().len());
    Ok(source)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Logging disabled: {e}");
    }

    let command = cli.command.unwrap_or(Commands::Play { hidden: None });

    match command {
        Commands::Play { hidden } => run_play_command(&cli.wordlist, hidden.as_deref(), cli.seed),
        Commands::Score { hidden, guess } => run_score_command(&hidden, &guess),
    }
}

fn run_play_command(wordlist: &str, hidden: Option<&str>, seed: Option<u64>) -> Result<()> {
    let words = load_words(wordlist)?;
    let source = build_source(words, hidden, seed)?;
    let mut engine = GuessEngine::new(source);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_play(&mut engine, stdin.lock(), &mut stdout)?;
    Ok(())
}

fn run_score_command(hidden: &str, guess: &str) -> Result<()> {
    let result = score_guess(hidden, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(
        &mut io::stdout(),
        &result.guess,
        &result.hidden,
        &result.feedback,
    )?;
    Ok(())
}
