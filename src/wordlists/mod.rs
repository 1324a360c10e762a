//! Word lists and hidden-word sources
//!
//! Provides the embedded word list, file loading, and the [`WordSource`]
//! implementations the game engine draws hidden words from.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{ScriptedSource, WordList, WordListError, WordSource};
