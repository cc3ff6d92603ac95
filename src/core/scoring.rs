//! Point values for accepted words
//!
//! A word is worth its length minus three, plus a bonus when it uses seven
//! distinct letters (every letter of the honeycomb).

use rustc_hash::FxHashSet;

/// Number of letters on a board, and distinct letters in a pangram
pub const BOARD_SIZE: usize = 7;

/// Bonus awarded on top of the base value for a pangram
pub const PANGRAM_BONUS: u32 = 7;

/// Collect the distinct characters of a word
#[inline]
#[must_use]
pub fn distinct_letters(word: &str) -> FxHashSet<char> {
    word.chars().collect()
}

/// Check whether a word has exactly seven distinct letters
///
/// # Examples
/// ```
/// use spelling_bee::core::is_pangram;
///
/// assert!(is_pangram("warming"));
/// assert!(!is_pangram("warm"));
/// ```
#[inline]
#[must_use]
pub fn is_pangram(word: &str) -> bool {
    distinct_letters(word).len() == BOARD_SIZE
}

/// Point value of a word
///
/// `len - 3`, plus [`PANGRAM_BONUS`] if the word has exactly seven distinct
/// letters. Words shorter than three letters are worth nothing.
///
/// # Examples
/// ```
/// use spelling_bee::core::word_points;
///
/// assert_eq!(word_points("GAIN"), 1);
/// assert_eq!(word_points("WARMING"), 11);
/// ```
#[must_use]
pub fn word_points(word: &str) -> u32 {
    let base = (word.chars().count() as u32).saturating_sub(3);

    if is_pangram(word) {
        base + PANGRAM_BONUS
    } else {
        base
    }
}
