//! Honeycomb board state
//!
//! A Board holds the seven letters of a round, the words found so far and the
//! running score. Guesses are checked against the dictionary and the letters.

use super::scoring::{BOARD_SIZE, distinct_letters, is_pangram, word_points};
use crate::dictionary::Dictionary;
use crate::generator::LetterPool;
use std::fmt;
use thiserror::Error;

/// Number of letters surrounding the center
pub const OUTER_LETTERS: usize = BOARD_SIZE - 1;

/// A board was configured with the wrong letters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("there must be 1 center letter: {0:?} is not valid")]
    CenterLength(String),

    #[error("there must be 6 other letters: {0:?} is not valid")]
    OtherLength(String),

    #[error("{0:?} is not a letter")]
    NotALetter(char),

    #[error("letter {0} appears more than once on the board")]
    DuplicateLetter(char),
}

/// Why a guess was not accepted
///
/// Rejections are an ordinary outcome of play; the board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessRejection {
    NotInDictionary,
    MissingCenterLetter,
    InvalidLetters,
    AlreadyGuessed,
}

impl GuessRejection {
    /// Message shown to the player
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NotInDictionary => "That word isn't in the dictionary.",
            Self::MissingCenterLetter => "That word doesn't include the center letter.",
            Self::InvalidLetters => "That word uses invalid letters.",
            Self::AlreadyGuessed => "You've guessed that word before.",
        }
    }
}

impl fmt::Display for GuessRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One round of Spelling Bee
#[derive(Debug, Clone)]
pub struct Board<'a> {
    dictionary: &'a Dictionary,
    center: char,
    letters: [char; BOARD_SIZE],
    guessed_words: Vec<String>,
    score: u32,
}

impl<'a> Board<'a> {
    /// Create a board from a center letter and the six letters around it
    ///
    /// Letters are uppercased. All seven must be distinct ASCII letters.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if `center` is not exactly one letter, `others`
    /// is not exactly six, any character is not a letter, or a letter repeats.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::Board;
    /// use spelling_bee::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["warming", "grain"]);
    /// let board = Board::new(&dict, "a", "wrmING").unwrap();
    ///
    /// assert_eq!(board.center(), 'A');
    /// assert_eq!(board.letters(), &['W', 'R', 'M', 'A', 'I', 'N', 'G']);
    /// assert!(Board::new(&dict, "ab", "cdefgh").is_err());
    /// ```
    pub fn new(dictionary: &'a Dictionary, center: &str, others: &str) -> Result<Self, BoardError> {
        let mut center_chars = center.chars();
        let center_letter = match (center_chars.next(), center_chars.next()) {
            (Some(c), None) => c,
            _ => return Err(BoardError::CenterLength(center.to_string())),
        };

        let outer: Vec<char> = others.chars().collect();
        if outer.len() != OUTER_LETTERS {
            return Err(BoardError::OtherLength(others.to_string()));
        }

        // Center goes in the middle of the outer letters
        let mut letters = ['\0'; BOARD_SIZE];
        let middle = OUTER_LETTERS / 2;
        let ordered = outer[..middle]
            .iter()
            .chain(std::iter::once(&center_letter))
            .chain(&outer[middle..]);

        for (slot, &raw) in letters.iter_mut().zip(ordered) {
            if !raw.is_ascii_alphabetic() {
                return Err(BoardError::NotALetter(raw));
            }
            *slot = raw.to_ascii_uppercase();
        }

        for (i, letter) in letters.iter().enumerate() {
            if letters[i + 1..].contains(letter) {
                return Err(BoardError::DuplicateLetter(*letter));
            }
        }

        Ok(Self {
            dictionary,
            center: center_letter.to_ascii_uppercase(),
            letters,
            guessed_words: Vec::new(),
            score: 0,
        })
    }

    /// Create a board from a generated letter pool
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if the pool does not hold seven distinct letters.
    pub fn from_pool(dictionary: &'a Dictionary, pool: &LetterPool) -> Result<Self, BoardError> {
        let others: String = pool.others().iter().collect();
        Self::new(dictionary, &pool.center().to_string(), &others)
    }

    /// Check a guess, recording it if it is accepted
    ///
    /// Checks run in order: dictionary, center letter, board letters,
    /// repeated guess. The first failure is returned and nothing changes.
    ///
    /// # Errors
    ///
    /// Returns the [`GuessRejection`] describing the first failed check.
    pub fn validate_guess(&mut self, word: &str) -> Result<(), GuessRejection> {
        let word = word.trim().to_uppercase();

        let verdict = self.check(&word);
        match verdict {
            Ok(()) => {
                tracing::debug!(word = %word, "guess accepted");
                self.guessed_words.push(word);
            }
            Err(reason) => tracing::debug!(word = %word, ?reason, "guess rejected"),
        }
        verdict
    }

    /// Run the validity checks without recording anything
    fn check(&self, word: &str) -> Result<(), GuessRejection> {
        if !self.dictionary.contains(word) {
            return Err(GuessRejection::NotInDictionary);
        }

        let used = distinct_letters(word);
        if !used.contains(&self.center) {
            return Err(GuessRejection::MissingCenterLetter);
        }

        if !used.iter().all(|c| self.contains_letter(*c)) {
            return Err(GuessRejection::InvalidLetters);
        }

        if self.guessed_words.iter().any(|w| w == word) {
            return Err(GuessRejection::AlreadyGuessed);
        }

        Ok(())
    }

    /// Award points for a word and return its value
    ///
    /// The cumulative score only ever increases.
    pub fn score(&mut self, word: &str) -> u32 {
        let points = word_points(&word.trim().to_uppercase());
        self.score += points;
        points
    }

    /// Validate a guess and score it if accepted
    ///
    /// # Errors
    ///
    /// Returns the [`GuessRejection`] if the guess is not accepted; the score
    /// is unchanged in that case.
    pub fn submit(&mut self, word: &str) -> Result<u32, GuessRejection> {
        self.validate_guess(word)?;
        Ok(self.score(word))
    }

    /// Every dictionary word that would be accepted on a fresh board
    #[must_use]
    pub fn solutions(&self) -> Vec<&'a str> {
        let dictionary = self.dictionary;
        dictionary
            .words()
            .iter()
            .map(String::as_str)
            .filter(|word| {
                word.contains(self.center) && word.chars().all(|c| self.contains_letter(c))
            })
            .collect()
    }

    /// Sum of the points of every word in [`Self::solutions`]
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.solutions().into_iter().map(word_points).sum()
    }

    /// Accepted words that use all seven letters
    pub fn found_pangrams(&self) -> impl Iterator<Item = &str> {
        self.guessed_words
            .iter()
            .map(String::as_str)
            .filter(|w| is_pangram(w))
    }

    #[inline]
    #[must_use]
    pub fn contains_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub const fn center(&self) -> char {
        self.center
    }

    /// All seven letters in display order, center in the middle
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; BOARD_SIZE] {
        &self.letters
    }

    /// Accepted words in the order they were found
    #[inline]
    #[must_use]
    pub fn guessed_words(&self) -> &[String] {
        &self.guessed_words
    }

    #[inline]
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.score
    }
}
