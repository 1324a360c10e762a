//! Game state and the guess engine
//!
//! The engine validates guesses against accumulated constraints, scores
//! accepted guesses, and tracks the win/loss/give-up transitions.

mod constraints;
mod engine;
mod error;
mod keyboard;
mod state;

pub use constraints::Constraints;
pub use engine::{GuessEngine, Submission, ValidGuess};
pub use error::{GuessError, TransitionError, ValidationResult};
pub use keyboard::Keyboard;
pub use state::{MAX_GUESSES, Outcome};
