//! Interactive line-mode game
//!
//! Reads guesses and commands line by line and renders the board after each
//! accepted guess.

use crate::game::{GuessEngine, Outcome, Submission};
use crate::output::{
    print_banner, print_board, print_game_over, print_keyboard, print_rejection, print_rules,
    print_status,
};
use crate::wordlists::WordSource;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Results across every game finished in one session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub games_finished: usize,
    pub survived: usize,
    pub found: usize,
    pub gave_up: usize,
}

impl SessionSummary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::InProgress => return,
            Outcome::Survived { .. } => self.survived += 1,
            Outcome::Found { .. } => self.found += 1,
            Outcome::GaveUp { .. } => self.gave_up += 1,
        }
        self.games_finished += 1;
    }
}

enum Command<'a> {
    Quit,
    Rules,
    NewGame,
    GiveUp,
    Guess(&'a str),
}

fn parse_command(input: &str) -> Option<Command<'_>> {
    match input {
        "" => None,
        "quit" | "q" | "exit" => Some(Command::Quit),
        "rules" | "help" | "?" => Some(Command::Rules),
        "new" | "restart" => Some(Command::NewGame),
        "giveup" | "give up" => Some(Command::GiveUp),
        guess => Some(Command::Guess(guess)),
    }
}

/// Run the interactive game until `quit` or end of input
///
/// Guesses are trimmed and lowercased before they reach the engine.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<S, R, W>(
    engine: &mut GuessEngine<S>,
    mut input: R,
    out: &mut W,
) -> Result<SessionSummary>
where
    S: WordSource,
    R: BufRead,
    W: Write,
{
    let mut summary = SessionSummary::default();

    print_banner(out)?;
    print_status(out, engine)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim().to_ascii_lowercase();

        let Some(command) = parse_command(&line) else {
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Rules => print_rules(out)?,
            Command::NewGame => {
                engine.restart();
                writeln!(out, "\nNew game started!")?;
                print_status(out, engine)?;
            }
            Command::GiveUp => match engine.give_up() {
                Ok(()) => finish_game(engine, out, &mut summary)?,
                Err(e) => writeln!(out, "  {e}. Type 'new' to play again.")?,
            },
            Command::Guess(guess) => match engine.submit(guess) {
                Ok(Submission::Accepted(_)) => {
                    writeln!(out)?;
                    print_board(out, engine)?;
                    print_keyboard(out, engine)?;
                    if engine.is_game_over() {
                        finish_game(engine, out, &mut summary)?;
                    } else {
                        print_status(out, engine)?;
                    }
                }
                Ok(Submission::Rejected(reasons)) => print_rejection(out, &reasons)?,
                Err(e) => writeln!(out, "  {e}. Type 'new' to play again.")?,
            },
        }
    }

    writeln!(
        out,
        "\nThanks for playing! Games: {}, survived: {}, found: {}, gave up: {}",
        summary.games_finished, summary.survived, summary.found, summary.gave_up
    )?;
    Ok(summary)
}

fn finish_game<S: WordSource, W: Write>(
    engine: &GuessEngine<S>,
    out: &mut W,
    summary: &mut SessionSummary,
) -> Result<()> {
    let outcome = engine.outcome();
    summary.record(outcome);
    print_game_over(out, outcome, engine.reveal_hidden_word()?)?;
    Ok(())
}
