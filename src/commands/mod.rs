//! Command implementations

pub mod play;
pub mod score;

pub use play::{SessionSummary, run_play};
pub use score::{ScoreResult, score_guess};
