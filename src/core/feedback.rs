//! Per-letter feedback for a guess against the hidden word
//!
//! Feedback follows standard Wordle scoring, including the handling of
//! duplicate letters: a letter is never marked correct or present more often
//! than it occurs in the hidden word.

use super::word::{WORD_LEN, Word, letter_index};
use std::fmt;

/// What a guess revealed about one letter
///
/// Variants are declared in precedence order, so `Ord` ranks them
/// `Unknown < Absent < PresentWrongPosition < CorrectPosition`. Merging two
/// observations of the same letter keeps the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LetterStatus {
    /// Not yet observed
    #[default]
    Unknown,
    /// Grey
    Absent,
    /// Yellow
    PresentWrongPosition,
    /// Red
    CorrectPosition,
}

impl LetterStatus {
    /// Combine with another observation, never downgrading
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// Display colour name used by the game
    #[must_use]
    pub const fn colour_name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Absent => "grey",
            Self::PresentWrongPosition => "yellow",
            Self::CorrectPosition => "red",
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.colour_name())
    }
}

/// Feedback for a single board position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterFeedback {
    pub index: usize,
    pub letter: u8,
    pub status: LetterStatus,
}

/// Ordered feedback for a whole guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    letters: [LetterFeedback; WORD_LEN],
}

impl Feedback {
    /// Score `guess` against `hidden`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume them from a per-letter
    ///    count of the hidden word
    /// 2. Second pass: for every other position, claim one remaining
    ///    instance of the letter if any is left, otherwise mark it absent
    ///
    /// # Examples
    /// ```
    /// use anti_wordle::core::{Feedback, LetterStatus, Word};
    ///
    /// let hidden = Word::new("arena").unwrap();
    /// let guess = Word::new("radar").unwrap();
    /// let feedback = Feedback::calculate(&guess, &hidden);
    ///
    /// use LetterStatus::{Absent, PresentWrongPosition as Present};
    /// assert_eq!(feedback.statuses(), [Present, Present, Absent, Present, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, hidden: &Word) -> Self {
        let mut remaining = hidden.letter_counts();
        let mut letters = [LetterFeedback {
            index: 0,
            letter: b'a',
            status: LetterStatus::Absent,
        }; WORD_LEN];

        for (i, slot) in letters.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            slot.index = i;
            slot.letter = letter;
            if letter == hidden.char_at(i) {
                slot.status = LetterStatus::CorrectPosition;
                remaining[letter_index(letter)] -= 1;
            }
        }

        for slot in &mut letters {
            if slot.status == LetterStatus::CorrectPosition {
                continue;
            }
            let count = &mut remaining[letter_index(slot.letter)];
            if *count > 0 {
                slot.status = LetterStatus::PresentWrongPosition;
                *count -= 1;
            }
        }

        Self { letters }
    }

    /// Feedback entries in board order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LEN] {
        &self.letters
    }

    /// Just the statuses, in board order
    #[must_use]
    pub fn statuses(&self) -> [LetterStatus; WORD_LEN] {
        self.letters.map(|l| l.status)
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.letters
            .iter()
            .all(|l| l.status == LetterStatus::CorrectPosition)
    }

    /// Number of positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.letters.iter().filter(|l| l.status == status).count()
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a LetterFeedback;
    type IntoIter = std::slice::Iter<'a, LetterFeedback>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, CorrectPosition as Correct, PresentWrongPosition as Present};

    fn score(guess: &str, hidden: &str) -> [LetterStatus; WORD_LEN] {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(hidden).unwrap()).statuses()
    }

    #[test]
    fn status_precedence() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert!(Absent > LetterStatus::Unknown);
        assert_eq!(Correct.merge(Absent), Correct);
        assert_eq!(Absent.merge(Present), Present);
        assert_eq!(LetterStatus::default(), LetterStatus::Unknown);
    }

    #[test]
    fn all_absent() {
        assert_eq!(score("crush", "table"), [Absent; WORD_LEN]);
        assert_eq!(score("fight", "adore"), [Absent; WORD_LEN]);
    }

    #[test]
    fn exact_match_is_all_correct() {
        let word = Word::new("table").unwrap();
        let feedback = Feedback::calculate(&word, &word);
        assert!(feedback.is_all_correct());
        assert_eq!(feedback.count(Correct), 5);
    }

    #[test]
    fn radar_against_arena() {
        // ARENA has two A's and one R; the second R has nothing left to claim
        assert_eq!(
            score("radar", "arena"),
            [Present, Present, Absent, Present, Absent]
        );
    }

    #[test]
    fn green_takes_priority_over_earlier_yellow() {
        // ROBOT vs FLOOR: the second O is exact, the first O claims the other
        assert_eq!(
            score("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn surplus_duplicates_are_absent() {
        // SPEED vs ERASE: both E's present, ERASE has exactly two
        assert_eq!(
            score("speed", "erase"),
            [Present, Absent, Present, Present, Absent]
        );
        // Only one L in TABLE
        assert_eq!(score("llama", "table"), [Present, Absent, Present, Absent, Absent]);
    }

    #[test]
    fn marks_never_exceed_hidden_counts() {
        let words = ["arena", "radar", "speed", "erase", "llama", "table", "array", "sassy"];
        for guess in words {
            for hidden in words {
                let g = Word::new(guess).unwrap();
                let h = Word::new(hidden).unwrap();
                let feedback = Feedback::calculate(&g, &h);
                let hidden_counts = h.letter_counts();
                let mut marked = [0u8; 26];
                for entry in &feedback {
                    if entry.status != Absent {
                        marked[letter_index(entry.letter)] += 1;
                    }
                }
                for letter in 0..26 {
                    assert!(
                        marked[letter] <= hidden_counts[letter],
                        "{guess} vs {hidden}: letter {} over-marked",
                        char::from(b'a' + letter as u8)
                    );
                }
            }
        }
    }

    #[test]
    fn entries_carry_index_and_letter() {
        let feedback =
            Feedback::calculate(&Word::new("radar").unwrap(), &Word::new("arena").unwrap());
        let first = feedback.letters()[0];
        assert_eq!(first.index, 0);
        assert_eq!(first.letter, b'r');
        assert_eq!(feedback.letters()[4].index, 4);
    }
}
