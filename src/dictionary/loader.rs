//! Dictionary file loading
//!
//! Reads plain-text word lists, one word per line.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dictionary {} contains no usable words", .0.display())]
    Empty(PathBuf),
}

/// Read every line of a word list file
///
/// The file handle is released before this returns; nothing is held open
/// for the lifetime of the game.
///
/// # Errors
///
/// Returns [`DictionaryError::Io`] if the file cannot be opened or is not
/// valid UTF-8.
pub fn read_lines(path: &Path) -> Result<Vec<String>, DictionaryError> {
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.lines().map(str::to_owned).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_lines_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "rain\n  gain \n\ngrain").unwrap();

        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["rain", "  gain ", "", "grain"]);
    }

    #[test]
    fn error_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("words.txt");

        let err = read_lines(&missing).unwrap_err();
        assert!(err.to_string().contains("words.txt"));
    }
}
