//! Interactive game loop
//!
//! Text-based rounds: draw a board, read guesses until `game-end`, then offer
//! another round.

use crate::core::Board;
use crate::dictionary::Dictionary;
use crate::generator::generate;
use crate::output::{render_board, render_round_summary, render_welcome};
use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Input that ends the current round
pub const END_ROUND: &str = "game-end";

const GUESS_PROMPT: &str = "Enter a word (Enter 'game-end' to end this round): ";
const PLAY_AGAIN_PROMPT: &str = "Play again? y/n: ";

/// Session settings from the command line
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    /// Clear the terminal before redrawing the board
    pub clear_screen: bool,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

/// What happened over a whole session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub rounds: usize,
    pub words_found: usize,
    pub points: u32,
}

/// Run the game on the terminal
///
/// # Errors
///
/// Returns an error if no board can be generated from the dictionary or if
/// reading from stdin or writing to stdout fails.
pub fn run_play(dictionary: &Dictionary, options: PlayOptions) -> Result<SessionReport> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    play_session(dictionary, &mut input, &mut output, &mut rand::rng(), options)
}

/// Drive a session over arbitrary input and output streams
///
/// The session ends when the player declines another round or the input
/// runs out.
///
/// # Errors
///
/// Returns an error if no board can be generated or on I/O failure.
pub fn play_session<I, W, R>(
    dictionary: &Dictionary,
    input: &mut I,
    out: &mut W,
    rng: &mut R,
    options: PlayOptions,
) -> Result<SessionReport>
where
    I: BufRead,
    W: Write,
    R: Rng,
{
    let mut report = SessionReport::default();

    clear(out, options)?;
    write!(out, "{}", render_welcome())?;

    loop {
        let pool = generate(dictionary, rng).context("could not set up a board")?;
        let mut board = Board::from_pool(dictionary, &pool)
            .with_context(|| format!("generated letters {pool} are not a valid board"))?;
        writeln!(out, "{}", render_board(&board))?;

        let play_again = loop {
            let Some(guess) = prompt(input, out, GUESS_PROMPT)? else {
                break false;
            };

            if guess == END_ROUND {
                clear(out, options)?;
                write!(out, "{}", render_round_summary(&board, pool.seed()))?;
                break ask_play_again(input, out)?;
            }

            let verdict = board.submit(&guess);
            clear(out, options)?;
            writeln!(out, "{}", render_board(&board))?;
            match verdict {
                Ok(points) => writeln!(out, "Congrats, that word was worth {points} points")?,
                Err(reason) => {
                    writeln!(out, "{reason}")?;
                    writeln!(out, "Please try again...")?;
                }
            }
        };

        report.rounds += 1;
        report.words_found += board.guessed_words().len();
        report.points += board.total_score();
        tracing::info!(
            score = board.total_score(),
            words = board.guessed_words().len(),
            "round finished"
        );

        if !play_again {
            break;
        }
        clear(out, options)?;
    }

    out.flush()?;
    Ok(report)
}

/// Ask until the answer is y, n, yes or no; end of input counts as no
fn ask_play_again<I: BufRead, W: Write>(input: &mut I, out: &mut W) -> Result<bool> {
    while let Some(answer) = prompt(input, out, PLAY_AGAIN_PROMPT)? {
        match answer.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => {}
        }
    }
    Ok(false)
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<I: BufRead, W: Write>(input: &mut I, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn clear<W: Write>(out: &mut W, options: PlayOptions) -> Result<()> {
    if options.clear_screen {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    const NO_CLEAR: PlayOptions = PlayOptions {
        clear_screen: false,
    };

    fn dictionary() -> Dictionary {
        // Single pangram keeps the board predictable up to letter order
        Dictionary::from_words(["warming", "grain", "rain", "arming", "gain", "zebra"])
    }

    fn run(script: &str) -> (SessionReport, String) {
        run_with(&dictionary(), script)
    }

    fn run_with(dict: &Dictionary, script: &str) -> (SessionReport, String) {
        colored::control::set_override(false);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);

        let report = play_session(dict, &mut input, &mut output, &mut rng, NO_CLEAR).unwrap();
        (report, String::from_utf8(output).unwrap())
    }

    #[test]
    fn accepted_guess_is_scored() {
        let (report, text) = run("warming\ngame-end\nn\n");

        assert!(text.contains("Congrats, that word was worth 11 points"));
        assert!(text.contains("Guessed Words: WARMING"));
        assert_eq!(
            report,
            SessionReport {
                rounds: 1,
                words_found: 1,
                points: 11
            }
        );
    }

    #[test]
    fn rejected_guesses_explain_why() {
        let (report, text) = run("zebra\nwarming\nWarming\nqwerty\ngame-end\nno\n");

        assert!(text.contains("That word isn't in the dictionary."));
        assert!(text.contains("You've guessed that word before."));
        assert_eq!(text.matches("Please try again...").count(), 3);
        assert_eq!(report.points, 11);
    }

    #[test]
    fn center_and_letter_rejections_reach_the_player() {
        // Same seed as the session, so this is the board the player sees.
        // Extra non-pangram words leave the pangram index unchanged.
        let pool = generate(
            &Dictionary::from_words(["warming"]),
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap();
        let without_center: String = pool.others().iter().collect();
        let foreign_letter = format!("{}Z", pool.center());

        let dict = Dictionary::from_words([
            "warming",
            without_center.as_str(),
            foreign_letter.as_str(),
        ]);
        let script = format!("{without_center}\n{foreign_letter}\ngame-end\nn\n");
        let (report, text) = run_with(&dict, &script);

        assert!(text.contains("That word doesn't include the center letter."));
        assert!(text.contains("That word uses invalid letters."));
        assert_eq!(text.matches("Please try again...").count(), 2);
        assert_eq!(report.words_found, 0);
        assert_eq!(report.points, 0);
    }

    #[test]
    fn play_again_reprompts_until_valid() {
        let (report, text) = run("game-end\nmaybe\nYES\ngame-end\nN\n");

        assert_eq!(text.matches(PLAY_AGAIN_PROMPT).count(), 3);
        assert_eq!(report.rounds, 2);
        assert_eq!(report.points, 0);
    }

    #[test]
    fn round_summary_reveals_seed() {
        let (_, text) = run("rain\ngame-end\nn\n");
        assert!(text.contains("The pangram was WARMING."));
    }

    #[test]
    fn end_of_input_ends_session() {
        let (report, text) = run("grain\n");

        assert_eq!(report.rounds, 1);
        assert!(text.ends_with(GUESS_PROMPT));
    }

    #[test]
    fn fails_without_a_seed_word() {
        let dict = Dictionary::from_words(["rain", "gain"]);
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();

        let result = play_session(&dict, &mut input, &mut output, &mut rand::rng(), NO_CLEAR);
        assert!(result.is_err());
    }
}
