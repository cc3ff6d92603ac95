//! Command implementations

pub mod generate;
pub mod play;
pub mod solve;

pub use generate::{generate_board, run_generate};
pub use play::{PlayOptions, SessionReport, play_session, run_play};
pub use solve::run_solve;
