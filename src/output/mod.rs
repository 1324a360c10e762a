//! Terminal output formatting
//!
//! Coloured tiles, the letter map, and game summaries.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_board, print_game_over, print_keyboard, print_rejection, print_rules,
    print_score_result, print_status,
};
