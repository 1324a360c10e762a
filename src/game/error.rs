//! Guess rejections and contract errors
//!
//! Player mistakes are values ([`GuessError`] inside [`ValidationResult`]).
//! Calls made at the wrong point of the game lifecycle are
//! [`TransitionError`]s.

use super::engine::ValidGuess;
use crate::core::WordError;
use std::fmt;

/// Why a guess was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Not exactly 5 lowercase letters
    MalformedGuess { guess: String, reason: WordError },
    /// Well-formed but not in the word list
    NotAWord(String),
    /// A real word that breaks the accumulated constraints
    ///
    /// Every list is filled in, even when another one is already non-empty.
    ConstraintViolation {
        /// Mandatory letters the guess lacks, alphabetical
        missing_mandatory: Vec<char>,
        /// Forbidden letters the guess uses, in guess order
        forbidden_used: Vec<char>,
        /// Locked positions the guess breaks, 1-based
        wrong_positions: Vec<usize>,
    },
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedGuess { guess, reason } => {
                write!(f, "Your guess must be a 5-letter word ('{guess}': {reason}).")
            }
            Self::NotAWord(word) => {
                write!(f, "'{word}' is not in the list of valid words.")
            }
            Self::ConstraintViolation {
                missing_mandatory,
                forbidden_used,
                wrong_positions,
            } => {
                let mut parts = Vec::new();
                if !missing_mandatory.is_empty() {
                    parts.push(format!(
                        "You must include these letters: {}.",
                        join(missing_mandatory)
                    ));
                }
                if !forbidden_used.is_empty() {
                    parts.push(format!(
                        "You cannot use these letters: {}.",
                        join(forbidden_used)
                    ));
                }
                if !wrong_positions.is_empty() {
                    parts.push(format!(
                        "The red letters must stay in positions: {}.",
                        join(wrong_positions)
                    ));
                }
                f.write_str(&parts.join(" "))
            }
        }
    }
}

impl std::error::Error for GuessError {}

/// Result of validating a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The guess may be evaluated
    Valid(ValidGuess),
    /// Every reason the guess was rejected, most fundamental first
    Invalid(Vec<GuessError>),
}

impl ValidationResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// All rejection reasons (empty when valid)
    #[must_use]
    pub fn reasons(&self) -> &[GuessError] {
        match self {
            Self::Valid(_) => &[],
            Self::Invalid(reasons) => reasons,
        }
    }

    /// The first violated check, which decides the error kind
    #[must_use]
    pub fn primary(&self) -> Option<&GuessError> {
        self.reasons().first()
    }

    /// One combined message covering every reason
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(reasons) => Some(
                reasons
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        }
    }
}

/// An engine call made at the wrong point in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    /// `evaluate` was given a validation from an earlier game state
    StaleValidation,
    /// The game is over; no more guesses or give-ups
    GameOver,
    /// The hidden word can only be revealed once the game is over
    GameInProgress,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleValidation => {
                write!(f, "Guess must be validated against the current game state")
            }
            Self::GameOver => write!(f, "The game is already over"),
            Self::GameInProgress => write!(f, "The hidden word is secret until the game ends"),
        }
    }
}

impl std::error::Error for TransitionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_message_lists_every_part() {
        let err = GuessError::ConstraintViolation {
            missing_mandatory: vec!['a', 'r'],
            forbidden_used: vec!['x'],
            wrong_positions: vec![1, 3],
        };
        assert_eq!(
            err.to_string(),
            "You must include these letters: a, r. You cannot use these letters: x. \
             The red letters must stay in positions: 1, 3."
        );
    }

    #[test]
    fn constraint_message_skips_empty_parts() {
        let err = GuessError::ConstraintViolation {
            missing_mandatory: Vec::new(),
            forbidden_used: vec!['d', 'q'],
            wrong_positions: Vec::new(),
        };
        assert_eq!(err.to_string(), "You cannot use these letters: d, q.");
    }

    #[test]
    fn invalid_result_combines_reasons() {
        let result = ValidationResult::Invalid(vec![
            GuessError::NotAWord("zzzzz".to_string()),
            GuessError::ConstraintViolation {
                missing_mandatory: vec!['e'],
                forbidden_used: Vec::new(),
                wrong_positions: Vec::new(),
            },
        ]);

        assert!(!result.is_valid());
        assert_eq!(result.reasons().len(), 2);
        assert!(matches!(result.primary(), Some(GuessError::NotAWord(_))));
        assert_eq!(
            result.message().unwrap(),
            "'zzzzz' is not in the list of valid words. You must include these letters: e."
        );
    }

    #[test]
    fn malformed_message_names_reason() {
        let err = GuessError::MalformedGuess {
            guess: "abc".to_string(),
            reason: WordError::InvalidLength(3),
        };
        assert!(err.to_string().contains("got 3"));
    }
}
