//! Anti-Wordle
//!
//! A word game that inverts Wordle: survive five guesses without finding the
//! hidden word. Every guess must respect what earlier feedback revealed:
//! yellow letters must be reused, grey letters are banned, and red letters
//! are locked in place.
//!
//! # Quick Start
//!
//! ```rust
//! use anti_wordle::core::Word;
//! use anti_wordle::game::{GuessEngine, Submission};
//! use anti_wordle::wordlists::ScriptedSource;
//!
//! let words: Vec<Word> = ["arena", "radar", "rival"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let source = ScriptedSource::new(words, vec![Word::new("arena").unwrap()]).unwrap();
//! let mut engine = GuessEngine::new(source);
//!
//! let Ok(Submission::Accepted(feedback)) = engine.submit("radar") else {
//!     panic!("radar should be accepted");
//! };
//! println!("{:?}", feedback.statuses());
//! assert!(!engine.is_game_over());
//! ```

// Core domain types
pub mod core;

// Game state and guess engine
pub mod game;

// Word lists and hidden-word sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
