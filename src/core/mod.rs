//! Core game types for Spelling Bee
//!
//! The board, its validation rules and the scoring formula.

mod board;
mod scoring;

pub use board::{Board, BoardError, GuessRejection, OUTER_LETTERS};
pub use scoring::{BOARD_SIZE, PANGRAM_BONUS, distinct_letters, is_pangram, word_points};
