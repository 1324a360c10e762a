//! Five-letter word representation
//!
//! A Word stores a validated 5-letter lowercase word as both text and bytes.

use std::fmt;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A 5-letter lowercase word
///
/// Ordering and hashing follow the text, so words can live in sets and sort
/// alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word must contain only lowercase letters a-z"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word, lowercasing the input first
    ///
    /// Use this for word-list entries and user-typed text. Guesses checked by
    /// the engine go through [`Word::parse_strict`] instead.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use anti_wordle::core::Word;
    ///
    /// let word = Word::new("Arena").unwrap();
    /// assert_eq!(word.text(), "arena");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::parse_strict(&text.into().to_ascii_lowercase())
    }

    /// Create a Word from text that must already be lowercase
    ///
    /// # Errors
    /// Returns `WordError` for the wrong length, non-ASCII input, or any
    /// character outside `a-z` (uppercase included).
    pub fn parse_strict(text: &str) -> Result<Self, WordError> {
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: text.to_string(),
            chars,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Iterate over all positions where a letter appears
    pub fn positions_of(&self, letter: u8) -> impl Iterator<Item = usize> + '_ {
        self.chars
            .iter()
            .enumerate()
            .filter(move |&(_, &ch)| ch == letter)
            .map(|(i, _)| i)
    }

    /// Count of each letter a-z in the word, indexed by `letter - b'a'`
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &ch in &self.chars {
            counts[letter_index(ch)] += 1;
        }
        counts
    }
}

/// Index of a lowercase letter in the alphabet (a = 0)
///
/// Callers must pass a byte in `a-z`.
#[inline]
#[must_use]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("arena").unwrap();
        assert_eq!(word.text(), "arena");
        assert_eq!(word.chars(), b"arena");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("TABLE").unwrap();
        assert_eq!(word.text(), "table");

        let word2 = Word::new("TaBlE").unwrap();
        assert_eq!(word2.text(), "table");
    }

    #[test]
    fn unicode_case_folding_not_applied() {
        // KELVIN SIGN lowercases to an ASCII 'k' under full Unicode rules
        assert_eq!(Word::new("\u{212A}NIFE"), Err(WordError::NonAscii));
        assert_eq!(Word::new("KNIFE").unwrap().text(), "knife");
    }

    #[test]
    fn strict_parse_rejects_uppercase() {
        assert_eq!(
            Word::parse_strict("Table"),
            Err(WordError::InvalidCharacters)
        );
        assert!(Word::parse_strict("table").is_ok());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err());
        assert!(Word::new("cran ").is_err());
        assert!(Word::new("cran!").is_err());
        assert_eq!(Word::new("crané"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'c'));
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("arena").unwrap();
        assert_eq!(word.positions_of(b'a').collect::<Vec<_>>(), vec![0, 4]);
        assert_eq!(word.positions_of(b'r').collect::<Vec<_>>(), vec![1]);
        assert_eq!(word.positions_of(b'z').count(), 0);
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("radar").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[letter_index(b'r')], 2);
        assert_eq!(counts[letter_index(b'a')], 2);
        assert_eq!(counts[letter_index(b'd')], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn word_display_and_ordering() {
        let a = Word::new("arena").unwrap();
        let b = Word::new("table").unwrap();
        assert_eq!(format!("{a}"), "arena");
        assert!(a < b);
    }
}
