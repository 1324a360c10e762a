//! The guess engine
//!
//! Owns one game's state and runs the two-phase guess pipeline: `validate`
//! checks a guess without touching the state, `evaluate` scores it and folds
//! the feedback into the accumulated constraints.

use super::constraints::Constraints;
use super::error::{GuessError, TransitionError, ValidationResult};
use super::keyboard::Keyboard;
use super::state::{GameState, MAX_GUESSES, Outcome};
use crate::core::{Feedback, LetterStatus, Word};
use crate::wordlists::WordSource;
use std::collections::BTreeSet;

/// Proof that a guess passed validation
///
/// Only the engine creates these. A token is tied to the game state it was
/// checked against and goes stale as soon as that state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidGuess {
    word: Word,
    epoch: u64,
}

impl ValidGuess {
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }
}

/// Result of [`GuessEngine::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted(Feedback),
    Rejected(Vec<GuessError>),
}

/// Runs one game at a time against a word source
///
/// # Examples
/// ```
/// use anti_wordle::core::Word;
/// use anti_wordle::game::{GuessEngine, Outcome, ValidationResult};
/// use anti_wordle::wordlists::ScriptedSource;
///
/// let words: Vec<Word> = ["arena", "radar", "table"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let source = ScriptedSource::new(words, vec![Word::new("table").unwrap()]).unwrap();
/// let mut engine = GuessEngine::new(source);
///
/// let ValidationResult::Valid(guess) = engine.validate("arena") else {
///     panic!("arena should be a valid first guess");
/// };
/// engine.evaluate(guess).unwrap();
/// assert_eq!(engine.outcome(), Outcome::InProgress);
/// ```
pub struct GuessEngine<S: WordSource> {
    source: S,
    state: GameState,
    epoch: u64,
}

impl<S: WordSource> GuessEngine<S> {
    /// Start a game with a hidden word drawn from `source`
    pub fn new(mut source: S) -> Self {
        let hidden = source.pick_hidden();
        log::debug!("New game, hidden word: {hidden}");
        Self {
            source,
            state: GameState::new(hidden),
            epoch: 0,
        }
    }

    /// Check a guess against the word list and the accumulated constraints
    ///
    /// Nothing is mutated, so validating again with the same state gives the
    /// same result. A malformed guess reports only `MalformedGuess`; otherwise
    /// `NotAWord` and the constraint checks are both reported when violated.
    #[must_use]
    pub fn validate(&self, guess: &str) -> ValidationResult {
        let word = match Word::parse_strict(guess) {
            Ok(word) => word,
            Err(reason) => {
                log::debug!("Rejected malformed guess {guess:?}: {reason}");
                return ValidationResult::Invalid(vec![GuessError::MalformedGuess {
                    guess: guess.to_string(),
                    reason,
                }]);
            }
        };

        let mut reasons = Vec::new();
        if !self.source.contains(&word) {
            reasons.push(GuessError::NotAWord(word.text().to_string()));
        }
        if let Some(violation) = self.state.constraints.check(&word) {
            reasons.push(violation);
        }

        if reasons.is_empty() {
            ValidationResult::Valid(ValidGuess {
                word,
                epoch: self.epoch,
            })
        } else {
            log::debug!("Rejected guess {word}: {} reason(s)", reasons.len());
            ValidationResult::Invalid(reasons)
        }
    }

    /// Score a validated guess and commit its feedback
    ///
    /// # Errors
    /// `GameOver` once the game has ended; `StaleValidation` if the state has
    /// changed since the guess was validated.
    pub fn evaluate(&mut self, guess: ValidGuess) -> Result<Feedback, TransitionError> {
        if self.state.game_over {
            return Err(TransitionError::GameOver);
        }
        if guess.epoch != self.epoch {
            return Err(TransitionError::StaleValidation);
        }

        let feedback = Feedback::calculate(&guess.word, &self.state.hidden);
        log::debug!(
            "Guess {} scored {:?}",
            guess.word,
            feedback.statuses().map(LetterStatus::colour_name)
        );

        self.state.record(guess.word, feedback.clone());
        self.epoch += 1;

        if self.state.game_over {
            log::info!("Game over: {}", self.state.outcome());
        }
        Ok(feedback)
    }

    /// Validate, then evaluate if valid
    ///
    /// # Errors
    /// `GameOver` once the game has ended. Player mistakes are returned as
    /// `Submission::Rejected`, not as errors.
    pub fn submit(&mut self, guess: &str) -> Result<Submission, TransitionError> {
        if self.state.game_over {
            return Err(TransitionError::GameOver);
        }
        match self.validate(guess) {
            ValidationResult::Valid(valid) => self.evaluate(valid).map(Submission::Accepted),
            ValidationResult::Invalid(reasons) => Ok(Submission::Rejected(reasons)),
        }
    }

    /// End the game without using a guess
    ///
    /// # Errors
    /// `GameOver` if the game has already ended.
    pub fn give_up(&mut self) -> Result<(), TransitionError> {
        if self.state.game_over {
            return Err(TransitionError::GameOver);
        }
        self.state.gave_up = true;
        self.state.game_over = true;
        self.epoch += 1;
        log::info!("Game over: {}", self.state.outcome());
        Ok(())
    }

    /// Discard the current game and start a new one
    pub fn restart(&mut self) {
        let hidden = self.source.pick_hidden();
        log::debug!("Restarted, hidden word: {hidden}");
        self.state = GameState::new(hidden);
        self.epoch += 1;
    }

    /// Accepted guesses in submission order
    #[must_use]
    pub fn current_guesses(&self) -> &[Word] {
        &self.state.guesses
    }

    /// Each accepted guess with its feedback
    pub fn history(&self) -> impl Iterator<Item = (&Word, &Feedback)> {
        self.state.guesses.iter().zip(&self.state.feedback)
    }

    /// Keyboard status of a letter, or `None` if it is not `a`-`z`
    #[must_use]
    pub fn keyboard_status_of(&self, letter: char) -> Option<LetterStatus> {
        self.state.keyboard.status_of(letter)
    }

    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.state.keyboard
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.state.constraints
    }

    /// Every letter used in any accepted guess
    #[must_use]
    pub fn used_letters(&self) -> BTreeSet<char> {
        self.state
            .guesses
            .iter()
            .flat_map(|word| word.chars().iter().map(|&b| char::from(b)))
            .collect()
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    #[must_use]
    pub const fn did_give_up(&self) -> bool {
        self.state.gave_up
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn score(&self) -> usize {
        self.state.guesses.len()
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.state.guesses.len())
    }

    /// The hidden word, once the game is over
    ///
    /// # Errors
    /// `GameInProgress` while the game is still running.
    pub fn reveal_hidden_word(&self) -> Result<&Word, TransitionError> {
        if self.state.game_over {
            Ok(&self.state.hidden)
        } else {
            Err(TransitionError::GameInProgress)
        }
    }

    /// The word source backing this engine
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }
}
