//! Stand-alone scoring command
//!
//! Scores one guess against a given hidden word without starting a game.

use crate::core::{Feedback, Word};

/// A guess, the word it was scored against, and the feedback
#[derive(Debug)]
pub struct ScoreResult {
    pub guess: Word,
    pub hidden: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `hidden`
///
/// Both words are lowercased first. Neither needs to be in a word list.
///
/// # Errors
///
/// Returns an error if either word is not a 5-letter alphabetic word.
pub fn score_guess(hidden: &str, guess: &str) -> Result<ScoreResult, String> {
    let hidden = Word::new(hidden).map_err(|e| format!("Invalid hidden word: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let feedback = Feedback::calculate(&guess, &hidden);

    Ok(ScoreResult {
        guess,
        hidden,
        feedback,
    })
}
