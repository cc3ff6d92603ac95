//! List every word a given board accepts

use crate::core::Board;
use crate::dictionary::Dictionary;
use crate::output::print_solutions;
use anyhow::{Context, Result};

/// Print the solutions for a board given by its center and outer letters
///
/// # Errors
///
/// Returns an error if the letters do not form a valid board.
pub fn run_solve(dictionary: &Dictionary, center: &str, others: &str) -> Result<()> {
    let board = Board::new(dictionary, center, others)
        .with_context(|| format!("invalid board: center {center:?}, letters {others:?}"))?;

    print_solutions(&board);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_board() {
        let dict = Dictionary::from_words(["warming"]);

        let err = run_solve(&dict, "a", "wrmin").unwrap_err();
        assert!(format!("{err:#}").contains("6 other letters"));
    }

    #[test]
    fn accepts_valid_board() {
        let dict = Dictionary::from_words(["warming", "grain"]);
        assert!(run_solve(&dict, "a", "wrming").is_ok());
    }
}
