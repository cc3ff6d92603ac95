//! Dictionary of playable words
//!
//! An immutable word set loaded once at startup. Lookups are exact and
//! case-insensitive; every stored word is uppercase ASCII. The words with
//! exactly seven distinct letters are indexed up front so the board
//! generator can pick one in constant time.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::DictionaryError;

use crate::core::is_pangram;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Read-only word list with hash lookup and a pangram index
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    lookup: FxHashSet<String>,
    pangrams: Vec<usize>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries are trimmed and uppercased. Blank entries and entries with
    /// anything other than ASCII letters are skipped; duplicates keep their
    /// first position.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["warming", "Warm", "", "it's"]);
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.contains("WARM"));
    /// assert!(dict.contains("warming"));
    /// ```
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut lookup = FxHashSet::default();

        for entry in entries {
            let Some(word) = normalize(entry.as_ref()) else {
                continue;
            };
            if lookup.insert(word.clone()) {
                words.push(word);
            }
        }

        let pangrams: Vec<usize> = words
            .par_iter()
            .enumerate()
            .filter(|(_, word)| is_pangram(word))
            .map(|(i, _)| i)
            .collect();

        tracing::debug!(
            words = words.len(),
            pangrams = pangrams.len(),
            "dictionary indexed"
        );

        Self {
            words,
            lookup,
            pangrams,
        }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(WORDS)
    }

    /// Load a dictionary file, one word per line
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] if the file cannot be read and
    /// [`DictionaryError::Empty`] if it holds no usable words.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let entries = loader::read_lines(path.as_ref())?;
        let dict = Self::from_words(entries);

        if dict.is_empty() {
            return Err(DictionaryError::Empty(path.as_ref().to_path_buf()));
        }

        tracing::info!(
            path = %path.as_ref().display(),
            words = dict.len(),
            "loaded dictionary"
        );
        Ok(dict)
    }

    /// Exact, case-insensitive membership
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim();
        if word.bytes().all(|b| b.is_ascii_uppercase()) {
            self.lookup.contains(word)
        } else {
            self.lookup.contains(&word.to_ascii_uppercase())
        }
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Words with exactly seven distinct letters, in load order
    pub fn pangrams(&self) -> impl Iterator<Item = &str> {
        self.pangrams.iter().map(|&i| self.words[i].as_str())
    }

    /// Number of indexed pangram words
    #[inline]
    #[must_use]
    pub fn pangram_count(&self) -> usize {
        self.pangrams.len()
    }

    /// Pangram word at a position of the pangram index
    #[must_use]
    pub fn pangram(&self, index: usize) -> Option<&str> {
        self.pangrams
            .get(index)
            .map(|&i| self.words[i].as_str())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize(entry: &str) -> Option<String> {
    let trimmed = entry.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_uppercase())
}
