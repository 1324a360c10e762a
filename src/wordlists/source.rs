//! Hidden-word sources
//!
//! The game engine only needs two things from a word supply: the set of
//! eligible words, and a way to draw the next hidden word.

use super::WORDS;
use super::loader::words_from_slice;
use crate::core::Word;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use std::fmt;

/// Supplies eligible words and picks hidden words
pub trait WordSource {
    /// Every word a player may guess
    fn all_words(&self) -> &FxHashSet<Word>;

    /// Draw the hidden word for a new game
    fn pick_hidden(&mut self) -> Word;

    /// Check membership in the eligible set
    fn contains(&self, word: &Word) -> bool {
        self.all_words().contains(word)
    }
}

impl<T: WordSource + ?Sized> WordSource for Box<T> {
    fn all_words(&self) -> &FxHashSet<Word> {
        (**self).all_words()
    }

    fn pick_hidden(&mut self) -> Word {
        (**self).pick_hidden()
    }

    fn contains(&self, word: &Word) -> bool {
        (**self).contains(word)
    }
}

/// Error type for word sources that cannot be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    /// The word list has no valid words
    Empty,
    /// A scripted source was given no hidden words
    NoHiddenWords,
    /// A scripted hidden word is not in the eligible list
    HiddenNotInList(String),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list contains no valid 5-letter words"),
            Self::NoHiddenWords => write!(f, "At least one hidden word is required"),
            Self::HiddenNotInList(word) => {
                write!(f, "Hidden word '{word}' is not in the word list")
            }
        }
    }
}

impl std::error::Error for WordListError {}

fn dedup(words: Vec<Word>) -> Result<(Vec<Word>, FxHashSet<Word>), WordListError> {
    let mut seen = FxHashSet::default();
    let words: Vec<Word> = words
        .into_iter()
        .filter(|word| seen.insert(word.clone()))
        .collect();

    if words.is_empty() {
        return Err(WordListError::Empty);
    }
    Ok((words, seen))
}

/// A word list that picks hidden words uniformly at random
pub struct WordList {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
    rng: StdRng,
}

impl WordList {
    /// Create a word list seeded from the operating system
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Create a word list with a reproducible sequence of hidden words
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use anti_wordle::core::Word;
    /// use anti_wordle::wordlists::{WordList, WordSource};
    ///
    /// let words = vec![Word::new("arena").unwrap(), Word::new("table").unwrap()];
    /// let mut a = WordList::with_seed(words.clone(), 7).unwrap();
    /// let mut b = WordList::with_seed(words, 7).unwrap();
    /// assert_eq!(a.pick_hidden(), b.pick_hidden());
    /// ```
    pub fn with_seed(words: Vec<Word>, seed: u64) -> Result<Self, WordListError> {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    /// The list compiled into the binary
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if the embedded list has no valid words.
    pub fn embedded(seed: Option<u64>) -> Result<Self, WordListError> {
        let words = words_from_slice(WORDS);
        match seed {
            Some(seed) => Self::with_seed(words, seed),
            None => Self::new(words),
        }
    }

    fn with_rng(words: Vec<Word>, rng: StdRng) -> Result<Self, WordListError> {
        let (words, lookup) = dedup(words)?;
        Ok(Self { words, lookup, rng })
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in their original order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl WordSource for WordList {
    fn all_words(&self) -> &FxHashSet<Word> {
        &self.lookup
    }

    fn pick_hidden(&mut self) -> Word {
        let idx = self.rng.random_range(0..self.words.len());
        self.words[idx].clone()
    }
}

/// A source that hands out a fixed sequence of hidden words, cycling
///
/// Used for practice games with a chosen word and for deterministic tests.
pub struct ScriptedSource {
    lookup: FxHashSet<Word>,
    hidden: Vec<Word>,
    next: usize,
}

impl ScriptedSource {
    /// Create a scripted source
    ///
    /// # Errors
    /// Returns `WordListError` if `words` is empty, `hidden` is empty, or a
    /// hidden word is missing from `words`.
    ///
    /// # Examples
    /// ```
    /// use anti_wordle::core::Word;
    /// use anti_wordle::wordlists::{ScriptedSource, WordSource};
    ///
    /// let words = vec![Word::new("arena").unwrap(), Word::new("table").unwrap()];
    /// let hidden = vec![Word::new("table").unwrap()];
    /// let mut source = ScriptedSource::new(words, hidden).unwrap();
    /// assert_eq!(source.pick_hidden().text(), "table");
    /// assert_eq!(source.pick_hidden().text(), "table");
    /// ```
    pub fn new(words: Vec<Word>, hidden: Vec<Word>) -> Result<Self, WordListError> {
        let (_, lookup) = dedup(words)?;
        if hidden.is_empty() {
            return Err(WordListError::NoHiddenWords);
        }
        if let Some(missing) = hidden.iter().find(|word| !lookup.contains(*word)) {
            return Err(WordListError::HiddenNotInList(missing.text().to_string()));
        }
        Ok(Self {
            lookup,
            hidden,
            next: 0,
        })
    }
}

impl WordSource for ScriptedSource {
    fn all_words(&self) -> &FxHashSet<Word> {
        &self.lookup
    }

    fn pick_hidden(&mut self) -> Word {
        let word = self.hidden[self.next % self.hidden.len()].clone();
        self.next = self.next.wrapping_add(1);
        word
    }
}
