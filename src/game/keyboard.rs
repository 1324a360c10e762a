//! Letter status board
//!
//! Tracks the best-known status of each letter a-z for display. Statuses only
//! ever move up the precedence order.

use crate::core::{Feedback, LetterStatus, Word, letter_index};

/// Best-known status for every letter a-z
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    statuses: [LetterStatus; 26],
}

impl Default for Keyboard {
    fn default() -> Self {
        Self {
            statuses: [LetterStatus::Unknown; 26],
        }
    }
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of a letter, or `None` if it is not `a`-`z`
    #[must_use]
    pub fn status_of(&self, letter: char) -> Option<LetterStatus> {
        letter
            .is_ascii_lowercase()
            .then(|| self.statuses[letter_index(letter as u8)])
    }

    /// Raise a letter's status; lower-precedence observations are ignored
    ///
    /// Bytes outside `a-z` are ignored.
    pub fn record(&mut self, letter: u8, status: LetterStatus) {
        if !letter.is_ascii_lowercase() {
            return;
        }
        let slot = &mut self.statuses[letter_index(letter)];
        *slot = slot.merge(status);
    }

    /// Fold one guess's feedback into the board
    ///
    /// A grey mark only colours a letter that is absent from the whole hidden
    /// word.
    pub(crate) fn absorb(&mut self, feedback: &Feedback, hidden: &Word) {
        for entry in feedback {
            match entry.status {
                LetterStatus::Absent if hidden.has_letter(entry.letter) => {}
                status => self.record(entry.letter, status),
            }
        }
    }

    /// Letters and statuses in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        (b'a'..=b'z').zip(self.statuses).map(|(l, s)| (char::from(l), s))
    }
}
