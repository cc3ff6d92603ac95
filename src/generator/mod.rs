//! Board generation
//!
//! Picks a dictionary word with exactly seven distinct letters and turns its
//! letters into a board. The seed word is always a solution of that board.

mod pool;

pub use pool::LetterPool;

use crate::core::is_pangram;
use crate::dictionary::Dictionary;
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

/// No seed word could be found
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("no word with exactly 7 distinct letters among {words} dictionary words")]
    ExhaustedSearch { words: usize },
}

/// Draw a random letter pool from the dictionary's pangram index
///
/// The seed is chosen uniformly among the pangram words and its letters are
/// shuffled, so any of the seven can land in the center.
///
/// # Errors
///
/// Returns [`GeneratorError::ExhaustedSearch`] if the dictionary has no word
/// with exactly seven distinct letters.
///
/// # Examples
/// ```
/// use spelling_bee::dictionary::Dictionary;
/// use spelling_bee::generator::generate;
///
/// let dict = Dictionary::from_words(["rain", "warming"]);
/// let pool = generate(&dict, &mut rand::rng()).unwrap();
/// assert_eq!(pool.seed(), "WARMING");
/// ```
pub fn generate<R: Rng>(dictionary: &Dictionary, rng: &mut R) -> Result<LetterPool, GeneratorError> {
    let exhausted = || GeneratorError::ExhaustedSearch {
        words: dictionary.len(),
    };

    let count = dictionary.pangram_count();
    if count == 0 {
        return Err(exhausted());
    }

    let seed = dictionary
        .pangram(rng.random_range(0..count))
        .ok_or_else(exhausted)?;
    let mut letters = pool::seed_letters(seed).ok_or_else(exhausted)?;
    letters.shuffle(rng);

    let pool = LetterPool::from_letters(letters, seed.to_string());
    tracing::debug!(seed = %pool.seed(), letters = %pool, "generated board");
    Ok(pool)
}

/// Scan the word list for a seed, starting at `start`
///
/// Walks forward from `start` (modulo the word count), wrapping past the end,
/// and stops after one full pass. The first word with exactly seven distinct
/// letters seeds the pool.
///
/// # Errors
///
/// Returns [`GeneratorError::ExhaustedSearch`] if a full pass finds nothing.
pub fn scan_from(dictionary: &Dictionary, start: usize) -> Result<LetterPool, GeneratorError> {
    let words = dictionary.words();
    let exhausted = GeneratorError::ExhaustedSearch { words: words.len() };
    if words.is_empty() {
        return Err(exhausted);
    }

    let start = start % words.len();
    words[start..]
        .iter()
        .chain(&words[..start])
        .find(|word| is_pangram(word))
        .and_then(|word| LetterPool::from_seed(word))
        .ok_or(exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, distinct_letters};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn assert_covers_seed(pool: &LetterPool) {
        let mut letters: Vec<char> = pool.others().to_vec();
        letters.push(pool.center());

        assert_eq!(pool.others().len(), 6);
        assert!(!pool.others().contains(&pool.center()));
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 7);

        let mut seed: Vec<char> = distinct_letters(pool.seed()).into_iter().collect();
        seed.sort_unstable();
        assert_eq!(letters, seed);
    }

    #[test]
    fn generate_covers_a_seed_word() {
        let dict = Dictionary::from_words(["rain", "gain", "warming", "painted", "grain"]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let pool = generate(&dict, &mut rng).unwrap();
            assert!(["WARMING", "PAINTED"].contains(&pool.seed()));
            assert_covers_seed(&pool);
        }
    }

    #[test]
    fn generated_board_accepts_its_seed() {
        let dict = Dictionary::embedded();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let pool = generate(&dict, &mut rng).unwrap();
            let mut board = Board::from_pool(&dict, &pool).unwrap();
            let seed = pool.seed().to_string();

            assert!(board.submit(&seed).unwrap() >= 11);
            assert!(board.solutions().contains(&seed.as_str()));
        }
    }

    #[test]
    fn generate_without_pangrams_fails() {
        let dict = Dictionary::from_words(["rain", "gain", "grain"]);

        assert_eq!(
            generate(&dict, &mut rand::rng()),
            Err(GeneratorError::ExhaustedSearch { words: 3 })
        );
    }

    #[test]
    fn generate_on_empty_dictionary_fails() {
        let dict = Dictionary::from_words(Vec::<String>::new());

        assert_eq!(
            generate(&dict, &mut rand::rng()),
            Err(GeneratorError::ExhaustedSearch { words: 0 })
        );
    }

    #[test]
    fn scan_wraps_around() {
        let dict = Dictionary::from_words(["warming", "rain", "gain", "grain"]);

        let pool = scan_from(&dict, 2).unwrap();
        assert_eq!(pool.seed(), "WARMING");
        assert_covers_seed(&pool);
    }

    #[test]
    fn scan_takes_first_match_from_start() {
        let dict = Dictionary::from_words(["warming", "rain", "painted", "grain"]);

        assert_eq!(scan_from(&dict, 1).unwrap().seed(), "PAINTED");
        assert_eq!(scan_from(&dict, 3).unwrap().seed(), "WARMING");
        // Start beyond the end wraps modulo the word count
        assert_eq!(scan_from(&dict, 6).unwrap().seed(), "PAINTED");
    }

    #[test]
    fn scan_stops_after_one_pass() {
        let dict = Dictionary::from_words(["rain", "gain"]);
        assert_eq!(
            scan_from(&dict, 1),
            Err(GeneratorError::ExhaustedSearch { words: 2 })
        );

        let empty = Dictionary::from_words(Vec::<String>::new());
        assert!(scan_from(&empty, 0).is_err());
    }
}
