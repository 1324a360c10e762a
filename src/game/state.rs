//! State of one game
//!
//! Created whole at game start and replaced whole on restart.

use super::constraints::Constraints;
use super::keyboard::Keyboard;
use crate::core::{Feedback, Word};
use std::fmt;

/// Maximum number of guesses in a game
pub const MAX_GUESSES: usize = 5;

/// How the game stands
///
/// Finding the hidden word is the losing outcome; surviving every guess
/// without finding it is the win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    /// The player guessed the hidden word
    Found { guesses: usize },
    /// The player made every guess without finding it
    Survived { guesses: usize },
    GaveUp { guesses: usize },
}

impl Outcome {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Survived { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InProgress => write!(f, "Game in progress"),
            Self::Found { guesses } => {
                write!(f, "You found the hidden word after {guesses} guesses!")
            }
            Self::Survived { .. } => {
                write!(f, "Congratulations! You successfully avoided the hidden word.")
            }
            Self::GaveUp { guesses } => write!(f, "You gave up after {guesses} guesses!"),
        }
    }
}

/// Everything that changes during one game
#[derive(Debug, Clone)]
pub struct GameState {
    pub(super) hidden: Word,
    pub(super) guesses: Vec<Word>,
    pub(super) feedback: Vec<Feedback>,
    pub(super) constraints: Constraints,
    pub(super) keyboard: Keyboard,
    pub(super) game_over: bool,
    pub(super) gave_up: bool,
}

impl GameState {
    pub(super) fn new(hidden: Word) -> Self {
        Self {
            hidden,
            guesses: Vec::new(),
            feedback: Vec::new(),
            constraints: Constraints::new(),
            keyboard: Keyboard::new(),
            game_over: false,
            gave_up: false,
        }
    }

    /// Commit an evaluated guess and apply the turn outcome
    pub(super) fn record(&mut self, guess: Word, feedback: Feedback) {
        self.constraints.absorb(&feedback, &self.hidden);
        self.keyboard.absorb(&feedback, &self.hidden);

        let found = guess == self.hidden;
        self.guesses.push(guess);
        self.feedback.push(feedback);

        if found || self.guesses.len() >= MAX_GUESSES {
            self.game_over = true;
        }
    }

    pub(super) fn outcome(&self) -> Outcome {
        let guesses = self.guesses.len();
        if !self.game_over {
            Outcome::InProgress
        } else if self.gave_up {
            Outcome::GaveUp { guesses }
        } else if self.guesses.last() == Some(&self.hidden) {
            Outcome::Found { guesses }
        } else {
            Outcome::Survived { guesses }
        }
    }
}
