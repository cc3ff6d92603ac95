//! Letter pools drawn from seed words

use crate::core::{BOARD_SIZE, OUTER_LETTERS};
use std::fmt;

/// Seven letters for a new board, split into center and outer letters
///
/// Every pool comes from a dictionary word with exactly seven distinct
/// letters, so the board it seeds has at least one pangram solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    center: char,
    others: [char; OUTER_LETTERS],
    seed: String,
}

impl LetterPool {
    /// Build a pool from a seed word
    ///
    /// Letters are taken in order of first appearance; the last one becomes
    /// the center. Returns `None` unless the word has exactly seven distinct
    /// letters.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::generator::LetterPool;
    ///
    /// let pool = LetterPool::from_seed("warming").unwrap();
    /// assert_eq!(pool.center(), 'G');
    /// assert_eq!(pool.others(), &['W', 'A', 'R', 'M', 'I', 'N']);
    /// assert!(LetterPool::from_seed("warm").is_none());
    /// ```
    #[must_use]
    pub fn from_seed(seed: &str) -> Option<Self> {
        let letters = seed_letters(seed)?;
        Some(Self::from_letters(letters, seed.to_ascii_uppercase()))
    }

    pub(crate) fn from_letters(letters: [char; BOARD_SIZE], seed: String) -> Self {
        let mut others = ['\0'; OUTER_LETTERS];
        others.copy_from_slice(&letters[..OUTER_LETTERS]);

        Self {
            center: letters[OUTER_LETTERS],
            others,
            seed,
        }
    }

    #[inline]
    #[must_use]
    pub const fn center(&self) -> char {
        self.center
    }

    #[inline]
    #[must_use]
    pub const fn others(&self) -> &[char; OUTER_LETTERS] {
        &self.others
    }

    /// The dictionary word the letters were drawn from
    #[inline]
    #[must_use]
    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.center)?;
        for letter in self.others {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// Distinct uppercase letters of a word, in order of first appearance
pub(crate) fn seed_letters(word: &str) -> Option<[char; BOARD_SIZE]> {
    let mut letters = ['\0'; BOARD_SIZE];
    let mut count = 0;

    for c in word.chars().map(|c| c.to_ascii_uppercase()) {
        if letters[..count].contains(&c) {
            continue;
        }
        if count == BOARD_SIZE {
            return None;
        }
        letters[count] = c;
        count += 1;
    }

    (count == BOARD_SIZE).then_some(letters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_letters_first_appearance_order() {
        assert_eq!(
            seed_letters("sparkle"),
            Some(['S', 'P', 'A', 'R', 'K', 'L', 'E'])
        );
        assert_eq!(
            seed_letters("Grumble"),
            Some(['G', 'R', 'U', 'M', 'B', 'L', 'E'])
        );
    }

    #[test]
    fn seed_letters_requires_exactly_seven() {
        assert_eq!(seed_letters("grain"), None);
        assert_eq!(seed_letters("abcdefgh"), None);
        assert_eq!(seed_letters(""), None);
    }

    #[test]
    fn repeated_letters_collapse() {
        // J U K E B O X with a doubled O and B
        assert_eq!(
            seed_letters("jukeboox"),
            Some(['J', 'U', 'K', 'E', 'B', 'O', 'X'])
        );
    }

    #[test]
    fn pool_keeps_seed() {
        let pool = LetterPool::from_seed("painted").unwrap();
        assert_eq!(pool.seed(), "PAINTED");
        assert_eq!(pool.center(), 'D');
        assert_eq!(pool.to_string(), "[D] PAINTE");
    }
}
