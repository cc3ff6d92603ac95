//! Display functions for boards and command results

use super::formatters::{honeycomb, plural, word_list};
use crate::core::{Board, is_pangram, word_points};
use colored::Colorize;

/// Welcome text shown once at the start of a session
#[must_use]
pub fn render_welcome() -> String {
    let rule = "-=".repeat(15);
    let closing = "=-".repeat(15);
    format!(
        "{} {} {}\n\
         You must form words of at least 4 characters, always including the center letter.\n\
         The longer the word, the more points it's worth. A word using all 7 characters gets a bonus.\n",
        rule.cyan(),
        "Welcome to Spelling Bee".bright_yellow().bold(),
        closing.cyan()
    )
}

/// Honeycomb, current points and guessed words
///
/// Pure formatting; the board is not touched.
#[must_use]
pub fn render_board(board: &Board) -> String {
    format!(
        "{}Current Points: {}\nGuessed Words: {}\n",
        honeycomb(board.letters(), board.center()),
        board.total_score(),
        word_list(board.guessed_words())
    )
}

/// Summary printed when a round ends
#[must_use]
pub fn render_round_summary(board: &Board, seed: &str) -> String {
    let solutions = board.solutions();
    let found = board.guessed_words().len();
    let pangrams = board.found_pangrams().count();

    format!(
        "\n{}\n\
         You scored {} of {} possible points.\n\
         Found {found} of {} {}, {pangrams} {}.\n\
         The pangram was {}.\n",
        "Round over!".bright_cyan().bold(),
        board.total_score().to_string().bright_yellow().bold(),
        board.max_score(),
        solutions.len(),
        plural(solutions.len(), "word", "words"),
        plural(pangrams, "pangram", "pangrams"),
        seed.bright_green().bold()
    )
}

/// One row of the solution listing: word, points, and a tag for pangrams
#[must_use]
pub fn solution_line(word: &str) -> String {
    let points = word_points(word);
    if is_pangram(word) {
        format!("  {:<20} {points:>3}  {}", word.green().bold(), "pangram".green())
    } else {
        format!("  {word:<20} {points:>3}")
    }
}

/// Print every solution of a board with its point value
pub fn print_solutions(board: &Board) {
    let solutions = board.solutions();

    println!("\n{}", "═".repeat(40).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS FOR".bright_cyan().bold(),
        board.letters().iter().collect::<String>().bright_yellow().bold()
    );
    println!(" Center letter: {}", board.center().to_string().bright_yellow());
    println!("{}", "═".repeat(40).cyan());

    for word in &solutions {
        println!("{}", solution_line(word));
    }

    println!(
        "\n {} {}, {} points available",
        solutions.len(),
        plural(solutions.len(), "word", "words"),
        board.max_score().to_string().bright_yellow().bold()
    );
}
