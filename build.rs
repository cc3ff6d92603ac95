//! Compiles the default dictionary into the binary
//!
//! `data/words.txt` is turned into a `WORDS` slice so the game runs without a
//! dictionary file on disk. Entries are lowercased and blank lines dropped;
//! anything else is left for `Dictionary::from_words` to judge at runtime.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

const DICTIONARY: &str = "data/words.txt";

fn main() {
    println!("cargo:rerun-if-changed={DICTIONARY}");

    let raw = fs::read_to_string(DICTIONARY)
        .unwrap_or_else(|e| panic!("cannot read dictionary {DICTIONARY}: {e}"));
    let entries: Vec<String> = raw
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect();

    let source = dictionary_source(&entries);
    let target = PathBuf::from(env::var("OUT_DIR").unwrap()).join("words.rs");
    fs::write(&target, source)
        .unwrap_or_else(|e| panic!("cannot write {}: {e}", target.display()));
}

/// Rust source declaring `WORDS` and `WORDS_COUNT` for the given entries
fn dictionary_source(entries: &[String]) -> String {
    let mut src = String::new();
    let _ = writeln!(src, "// Generated from {DICTIONARY} by build.rs");
    let _ = writeln!(src);
    let _ = writeln!(src, "/// Built-in dictionary, one entry per line of `{DICTIONARY}`");
    let _ = writeln!(src, "pub const WORDS: &[&str] = &[");
    for word in entries {
        let _ = writeln!(src, "    {word:?},");
    }
    let _ = writeln!(src, "];");
    let _ = writeln!(src);
    let _ = writeln!(src, "/// Entries in [`WORDS`]");
    let _ = writeln!(src, "pub const WORDS_COUNT: usize = {};", entries.len());
    src
}
