//! Formatting utilities for terminal output

use crate::core::BOARD_SIZE;
use colored::Colorize;

/// Honeycomb outline; each `@` is filled with one letter, top to bottom
const HONEYCOMB: [&str; 7] = [
    r"           ___",
    r"       ___/ @ \___",
    r"      / @ \___/ @ \",
    r"      \___/ @ \___/",
    r"      / @ \___/ @ \",
    r"      \___/ @ \___/",
    r"          \___/",
];

/// Draw the honeycomb with the center cell highlighted
///
/// Letters fill the cells in reading order, so the middle letter of the
/// display order lands in the center cell.
#[must_use]
pub fn honeycomb(letters: &[char; BOARD_SIZE], center: char) -> String {
    let mut cells = letters.iter();
    let mut out = String::new();

    for line in HONEYCOMB {
        for ch in line.chars() {
            if ch != '@' {
                out.push(ch);
                continue;
            }
            match cells.next() {
                Some(&letter) if letter == center => {
                    out.push_str(&letter.to_string().bright_yellow().bold().to_string());
                }
                Some(&letter) => out.push(letter),
                None => out.push(' '),
            }
        }
        out.push('\n');
    }

    out
}

/// Join guessed words for the history line
#[must_use]
pub fn word_list(words: &[String]) -> String {
    words.join(", ")
}

/// Singular or plural noun for a count
#[must_use]
pub const fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}
