//! Constraints accumulated from feedback
//!
//! Three monotonic collections: locked positions (red), mandatory letters
//! (yellow) and forbidden letters (grey). Every later guess must satisfy all
//! of them.

use super::error::GuessError;
use crate::core::{Feedback, LetterStatus, Word};
use std::collections::{BTreeMap, BTreeSet};

/// Accumulated position locks, mandatory letters and forbidden letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    positions: BTreeMap<usize, u8>,
    mandatory: BTreeSet<u8>,
    forbidden: BTreeSet<u8>,
}

impl Constraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Board index (0-based) to locked letter
    #[must_use]
    pub const fn positions(&self) -> &BTreeMap<usize, u8> {
        &self.positions
    }

    /// Letters every guess must contain
    #[must_use]
    pub const fn mandatory(&self) -> &BTreeSet<u8> {
        &self.mandatory
    }

    /// Letters no guess may contain
    #[must_use]
    pub const fn forbidden(&self) -> &BTreeSet<u8> {
        &self.forbidden
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.mandatory.is_empty() && self.forbidden.is_empty()
    }

    /// Check a guess against every constraint
    ///
    /// Returns `None` when the guess satisfies all three checks. Otherwise all
    /// three are computed and reported together.
    #[must_use]
    pub fn check(&self, guess: &Word) -> Option<GuessError> {
        let missing_mandatory: Vec<char> = self
            .mandatory
            .iter()
            .filter(|&&letter| !guess.has_letter(letter))
            .map(|&letter| char::from(letter))
            .collect();

        let mut forbidden_used: Vec<char> = Vec::new();
        for &letter in guess.chars() {
            let ch = char::from(letter);
            if self.forbidden.contains(&letter) && !forbidden_used.contains(&ch) {
                forbidden_used.push(ch);
            }
        }

        let wrong_positions: Vec<usize> = self
            .positions
            .iter()
            .filter(|&(&index, &letter)| guess.char_at(index) != letter)
            .map(|(&index, _)| index + 1)
            .collect();

        if missing_mandatory.is_empty() && forbidden_used.is_empty() && wrong_positions.is_empty()
        {
            return None;
        }

        Some(GuessError::ConstraintViolation {
            missing_mandatory,
            forbidden_used,
            wrong_positions,
        })
    }

    /// Fold one guess's feedback into the constraints
    ///
    /// Absent marks only forbid a letter when it occurs nowhere in `hidden`;
    /// a surplus duplicate of a present letter is not forbidden.
    pub(crate) fn absorb(&mut self, feedback: &Feedback, hidden: &Word) {
        for entry in feedback {
            match entry.status {
                LetterStatus::CorrectPosition => {
                    self.positions.entry(entry.index).or_insert(entry.letter);
                }
                LetterStatus::PresentWrongPosition => {
                    self.mandatory.insert(entry.letter);
                }
                LetterStatus::Absent if !hidden.has_letter(entry.letter) => {
                    self.forbidden.insert(entry.letter);
                }
                LetterStatus::Absent | LetterStatus::Unknown => {}
            }
        }

        debug_assert!(
            self.forbidden
                .iter()
                .all(|f| !self.mandatory.contains(f) && !self.positions.values().any(|p| p == f)),
            "forbidden letters overlap required letters"
        );
    }
}
