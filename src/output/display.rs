//! Display functions for the game
//!
//! Everything writes to a caller-supplied writer so the play loop can be
//! driven from tests.

use super::formatters::{
    feedback_tiles, feedback_to_emoji, keyboard_rows, letter_list, locked_pattern,
};
use crate::core::{Feedback, Word};
use crate::game::{GuessEngine, GuessError, MAX_GUESSES, Outcome};
use crate::wordlists::WordSource;
use colored::Colorize;
use std::io::{self, Write};

const RULES: &str = "\
Objective: avoid guessing the hidden 5-letter word for as long as you can.

  1. Enter a 5-letter guess.
  2. Letters in the correct position are shown in red.
  3. Letters in the word but in the wrong position are shown in yellow.
  4. Letters not in the word are shown in grey.

Rules:
  - Every guess must include all yellow letters found so far.
  - Grey letters cannot be used again once discovered.
  - A red letter must stay in its position for the rest of the game.
  - Survive 5 guesses without finding the hidden word to win.

Commands: 'giveup' to give up, 'new' for a new game, 'rules' for this text, 'quit' to exit.";

/// Print the banner shown when the game starts
///
/// # Errors
/// Returns any error from the writer.
pub fn print_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, "{}", "                      ANTI-WORDLE".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out, "Type 'rules' for instructions.\n")
}

/// Print the how-to-play text
///
/// # Errors
/// Returns any error from the writer.
pub fn print_rules(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{RULES}\n")
}

/// Print every guess so far as coloured tiles with an emoji summary
///
/// # Errors
/// Returns any error from the writer.
pub fn print_board<S: WordSource>(out: &mut impl Write, engine: &GuessEngine<S>) -> io::Result<()> {
    for (i, (_, feedback)) in engine.history().enumerate() {
        writeln!(
            out,
            "  {}. {}  {}",
            i + 1,
            feedback_tiles(feedback),
            feedback_to_emoji(feedback)
        )?;
    }
    Ok(())
}

/// Print the letter map
///
/// # Errors
/// Returns any error from the writer.
pub fn print_keyboard<S: WordSource>(
    out: &mut impl Write,
    engine: &GuessEngine<S>,
) -> io::Result<()> {
    writeln!(out, "\n  {}", "Available letters:".bright_cyan())?;
    for row in keyboard_rows(engine.keyboard()) {
        writeln!(out, "  {row}")?;
    }
    Ok(())
}

/// Print the turn counter and the constraints the next guess must meet
///
/// # Errors
/// Returns any error from the writer.
pub fn print_status<S: WordSource>(
    out: &mut impl Write,
    engine: &GuessEngine<S>,
) -> io::Result<()> {
    let constraints = engine.constraints();
    writeln!(
        out,
        "\n  Guess {}/{MAX_GUESSES}   locked: {}   must include: {}   banned: {}",
        engine.score() + 1,
        locked_pattern(constraints.positions()),
        letter_list(constraints.mandatory()),
        letter_list(constraints.forbidden()),
    )
}

/// Print why a guess was rejected
///
/// # Errors
/// Returns any error from the writer.
pub fn print_rejection(out: &mut impl Write, reasons: &[GuessError]) -> io::Result<()> {
    for reason in reasons {
        writeln!(out, "  {} {reason}", "✗".red().bold())?;
    }
    Ok(())
}

/// Print the end-of-game summary
///
/// # Errors
/// Returns any error from the writer.
pub fn print_game_over(out: &mut impl Write, outcome: Outcome, hidden: &Word) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    let headline = outcome.to_string();
    match outcome {
        Outcome::Survived { .. } => writeln!(out, "  {}", headline.green().bold())?,
        Outcome::Found { .. } => writeln!(out, "  {}", headline.red().bold())?,
        Outcome::GaveUp { .. } | Outcome::InProgress => {
            writeln!(out, "  {}", headline.yellow().bold())?;
        }
    }
    if let Outcome::Found { guesses } | Outcome::Survived { guesses } = outcome {
        writeln!(out, "  Score: {guesses}")?;
    }
    writeln!(
        out,
        "  The hidden word was: {}",
        hidden.text().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(out, "Type 'new' to play again or 'quit' to exit.")
}

/// Print the result of the stand-alone score command
///
/// # Errors
/// Returns any error from the writer.
pub fn print_score_result(
    out: &mut impl Write,
    guess: &Word,
    hidden: &Word,
    feedback: &Feedback,
) -> io::Result<()> {
    writeln!(
        out,
        "{} against {}:",
        guess.text().to_uppercase().bold(),
        hidden.text().to_uppercase().bold()
    )?;
    writeln!(out, "  {}  {}", feedback_tiles(feedback), feedback_to_emoji(feedback))?;
    for entry in feedback {
        writeln!(
            out,
            "  {}. {} {}",
            entry.index + 1,
            char::from(entry.letter).to_ascii_uppercase(),
            entry.status
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::ScriptedSource;
    use crate::wordlists::loader::words_from_slice;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn engine() -> GuessEngine<ScriptedSource> {
        let source = ScriptedSource::new(
            words_from_slice(&["arena", "radar", "table"]),
            words_from_slice(&["arena"]),
        )
        .unwrap();
        GuessEngine::new(source)
    }

    #[test]
    fn status_lists_constraints() {
        let mut engine = engine();
        engine.submit("radar").unwrap();
        let text = render(|out| print_status(out, &engine));
        assert!(text.contains("Guess 2/5"));
        assert!(text.contains("must include: a, r"));
        assert!(text.contains("banned: d"));
        assert!(text.contains("locked: _____"));
    }

    #[test]
    fn board_lists_each_guess() {
        let mut engine = engine();
        engine.submit("radar").unwrap();
        let text = render(|out| print_board(out, &engine));
        assert!(text.contains("1.  R   A   D   A   R "));
        assert!(text.contains("🟨🟨⬜🟨⬜"));
    }

    #[test]
    fn game_over_reveals_word_and_score() {
        let hidden = Word::new("arena").unwrap();
        let text = render(|out| print_game_over(out, Outcome::Survived { guesses: 5 }, &hidden));
        assert!(text.contains("successfully avoided"));
        assert!(text.contains("Score: 5"));
        assert!(text.contains("ARENA"));

        let text = render(|out| print_game_over(out, Outcome::GaveUp { guesses: 1 }, &hidden));
        assert!(text.contains("gave up after 1 guesses"));
        assert!(!text.contains("Score"));
    }

    #[test]
    fn score_result_lists_statuses() {
        let guess = Word::new("radar").unwrap();
        let hidden = Word::new("arena").unwrap();
        let feedback = Feedback::calculate(&guess, &hidden);
        let text = render(|out| print_score_result(out, &guess, &hidden, &feedback));
        assert!(text.contains("RADAR against ARENA"));
        assert!(text.contains("3. D grey"));
        assert!(text.contains("1. R yellow"));
    }

    #[test]
    fn rules_mention_commands() {
        let text = render(|out| print_rules(out));
        assert!(text.contains("giveup"));
        assert!(text.contains("5 guesses"));
    }
}
