//! Core domain types for Anti-Wordle
//!
//! Words and per-letter feedback. Pure values with no game state.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterFeedback, LetterStatus};
pub use word::{WORD_LEN, Word, WordError};
pub(crate) use word::letter_index;
