//! Print a random board without playing it

use crate::core::Board;
use crate::dictionary::Dictionary;
use crate::generator::{LetterPool, generate};
use crate::output::render_board;
use anyhow::{Context, Result};
use rand::Rng;

/// Draw a board and return its letter pool together with the rendered board
///
/// # Errors
///
/// Returns an error if the dictionary has no word with seven distinct letters.
pub fn generate_board<R: Rng>(dictionary: &Dictionary, rng: &mut R) -> Result<(LetterPool, String)> {
    let pool = generate(dictionary, rng).context("could not generate a board")?;
    let board = Board::from_pool(dictionary, &pool)?;
    let rendered = render_board(&board);
    Ok((pool, rendered))
}

/// Print a random board; with `reveal`, also print the seed word
///
/// # Errors
///
/// Returns an error if no board can be generated.
pub fn run_generate(dictionary: &Dictionary, reveal: bool) -> Result<()> {
    let (pool, rendered) = generate_board(dictionary, &mut rand::rng())?;

    println!("{rendered}");
    println!("Letters: {pool}");
    if reveal {
        println!("Pangram: {}", pool.seed());
    }
    Ok(())
}
