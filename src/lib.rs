//! Spelling Bee
//!
//! A terminal word game played on a honeycomb of seven letters. Every word
//! must use the center letter and only letters from the honeycomb.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_bee::core::{Board, GuessRejection};
//! use spelling_bee::dictionary::Dictionary;
//!
//! let dict = Dictionary::from_words(["warming", "grain", "rain"]);
//! let mut board = Board::new(&dict, "a", "wrming").unwrap();
//!
//! assert_eq!(board.submit("warming"), Ok(11));
//! assert_eq!(board.submit("warming"), Err(GuessRejection::AlreadyGuessed));
//! assert_eq!(board.total_score(), 11);
//! ```

// Core game types
pub mod core;

// Word lists
pub mod dictionary;

// Board generation
pub mod generator;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Diagnostic logging
pub mod logging;
