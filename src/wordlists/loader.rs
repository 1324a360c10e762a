//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use anti_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_str(&content);
    log::info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-delimited words
///
/// Lines are trimmed and lowercased. Blank lines, `#` comments, and entries
/// that are not 5-letter words are skipped.
///
/// # Examples
/// ```
/// use anti_wordle::wordlists::loader::words_from_str;
///
/// let words = words_from_str("Arena\n# comment\nradar\ntoolong\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "arena");
/// ```
#[must_use]
pub fn words_from_str(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    log::trace!("Skipping word list entry {trimmed:?}: {e}");
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use anti_wordle::wordlists::loader::words_from_slice;
/// use anti_wordle::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["arena", "radar", "table"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "arena");
        assert_eq!(words[2].text(), "table");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["arena", "toolong", "abc", "table"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "arena");
        assert_eq!(words[1].text(), "table");
    }

    #[test]
    fn words_from_str_trims_and_lowercases() {
        let words = words_from_str("  ARENA  \r\n\n\tTable\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["arena", "table"]);
    }

    #[test]
    fn words_from_str_skips_comments() {
        let words = words_from_str("# header\narena\n#radar\n");
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn load_from_missing_file_is_error() {
        let path = std::env::temp_dir().join("anti_wordle_no_such_list.txt");
        let _ = fs::remove_file(&path);
        assert!(load_from_file(&path).is_err());
    }

    #[test]
    fn load_from_file_round_trip() {
        let path = std::env::temp_dir().join("anti_wordle_loader_test.txt");
        fs::write(&path, "arena\nradar\nnope\n").unwrap();

        let words = load_from_file(&path).unwrap();
        assert_eq!(words.len(), 2);

        let _ = fs::remove_file(&path);
    }
}
