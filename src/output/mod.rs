//! Terminal output formatting
//!
//! Rendering for the honeycomb, round summaries and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_solutions, render_board, render_round_summary, render_welcome, solution_line,
};
