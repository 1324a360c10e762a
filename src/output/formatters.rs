//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, WORD_LEN};
use crate::game::Keyboard;
use colored::{ColoredString, Colorize};
use std::collections::BTreeMap;

/// Keyboard layout used for the letter map
pub const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .statuses()
        .iter()
        .map(|status| match status {
            LetterStatus::CorrectPosition => '🟥',
            LetterStatus::PresentWrongPosition => '🟨',
            LetterStatus::Absent | LetterStatus::Unknown => '⬜',
        })
        .collect()
}

/// A single coloured letter tile
///
/// Unknown letters are shown green, meaning "still available".
#[must_use]
pub fn letter_tile(letter: char, status: LetterStatus) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        LetterStatus::CorrectPosition => text.white().bold().on_red(),
        LetterStatus::PresentWrongPosition => text.black().bold().on_yellow(),
        LetterStatus::Absent => text.white().on_bright_black(),
        LetterStatus::Unknown => text.white().on_green(),
    }
}

/// A guess as a row of coloured tiles
#[must_use]
pub fn feedback_tiles(feedback: &Feedback) -> String {
    feedback
        .into_iter()
        .map(|entry| letter_tile(char::from(entry.letter), entry.status).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The letter map in QWERTY rows, each row indented to stagger like a keyboard
#[must_use]
pub fn keyboard_rows(keyboard: &Keyboard) -> Vec<String> {
    QWERTY_ROWS
        .iter()
        .enumerate()
        .map(|(row, letters)| {
            let keys: Vec<String> = letters
                .chars()
                .map(|c| {
                    letter_tile(c, keyboard.status_of(c).unwrap_or_default()).to_string()
                })
                .collect();
            format!("{}{}", " ".repeat(row * 2), keys.join(" "))
        })
        .collect()
}

/// Locked positions as a pattern like `_A__E`
#[must_use]
pub fn locked_pattern(positions: &BTreeMap<usize, u8>) -> String {
    (0..WORD_LEN)
        .map(|i| {
            positions
                .get(&i)
                .map_or('_', |&l| char::from(l).to_ascii_uppercase())
        })
        .collect()
}

/// Letters as a comma-separated list, or `-` if there are none
#[must_use]
pub fn letter_list<'a>(letters: impl IntoIterator<Item = &'a u8>) -> String {
    let list: Vec<String> = letters
        .into_iter()
        .map(|&l| char::from(l).to_string())
        .collect();
    if list.is_empty() {
        "-".to_string()
    } else {
        list.join(", ")
    }
}
