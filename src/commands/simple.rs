//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::output::formatters::{colored_feedback, feedback_to_emoji, hint_line};
use crate::round::Outcome;
use crate::session::{Game, SessionStore};
use crate::wordlists::WordSource;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the line-mode game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S, W, R>(game: &mut Game<'_, S, W, R>) -> Result<()>
where
    S: SessionStore,
    W: WordSource + ?Sized,
    R: Rng,
{
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(game, stdin.lock(), stdout.lock())
}

/// Run the line-mode game over arbitrary input and output
///
/// Lines starting with `/` are commands (`/hint`, `/reset`, `/quit`);
/// anything else is a guess. End of input quits.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<S, W, R, I, O>(
    game: &mut Game<'_, S, W, R>,
    mut input: I,
    mut out: O,
) -> Result<()>
where
    S: SessionStore,
    W: WordSource + ?Sized,
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║            Guess the Word                    ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(out, "Type a guess and press Enter.")?;
    writeln!(out, "Commands: /hint to reveal a letter, /reset for a new word, /quit to exit\n")?;

    let mut turn = 1;
    let mut line = String::new();

    loop {
        let view = game.view();
        writeln!(out, "{}", hint_line(&view.hint_display, view.word_length))?;
        write!(out, "Guess {turn}: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out, "\n👋 Thanks for playing!")?;
            return Ok(());
        }
        let entry = line.trim().to_lowercase();

        match entry.as_str() {
            "" => {}
            "/quit" | "/q" | "/exit" => {
                writeln!(out, "\n👋 Thanks for playing!")?;
                return Ok(());
            }
            "/hint" | "/h" if view.fully_revealed => {
                writeln!(out, "Every letter is already revealed!\n")?;
            }
            "/hint" | "/h" => match game.hint() {
                Some(position) => {
                    writeln!(out, "💡 Revealed letter {}\n", position + 1)?;
                }
                None => writeln!(out, "Every letter is already revealed!\n")?,
            },
            "/reset" | "/new" | "/n" => {
                game.reset();
                turn = 1;
                writeln!(out, "\n🔄 New word chosen!\n")?;
            }
            cmd if cmd.starts_with('/') => {
                writeln!(out, "❌ Unknown command '{cmd}'\n")?;
            }
            guess => match game.guess(guess) {
                Err(e) => writeln!(out, "❌ {e}\n")?,
                Ok(report) => {
                    writeln!(
                        out,
                        "   {}  {}",
                        colored_feedback(&report.feedback),
                        feedback_to_emoji(&report.feedback)
                    )?;
                    match report.outcome {
                        Outcome::Solved { answer } => {
                            writeln!(
                                out,
                                "\n{} The word was {} ({} {}).\n",
                                "🎉 Correct!".bright_green().bold(),
                                answer.text().to_uppercase(),
                                turn,
                                if turn == 1 { "guess" } else { "guesses" }
                            )?;
                            writeln!(out, "🔄 New word chosen!\n")?;
                            turn = 1;
                        }
                        Outcome::TryAgain => {
                            writeln!(out, "Try again.\n")?;
                            turn += 1;
                        }
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySession;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn play(words: &[&str], script: &str) -> (String, MemorySession) {
        let list = WordList::new(words_from_slice(words)).unwrap();
        let mut game = Game::new(MemorySession::default(), &list, StdRng::seed_from_u64(5));
        let mut out = Vec::new();

        run_simple_with(&mut game, script.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), game.store().clone())
    }

    #[test]
    fn quits_on_end_of_input() {
        let (out, _) = play(&["apple"], "");
        assert!(out.contains("_ _ _ _ _  (5 letters)"));
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn wrong_length_reports_error() {
        let (out, _) = play(&["apple"], "app\n/quit\n");
        assert!(out.contains("guess must be 5 letters long, got 3"));
    }

    #[test]
    fn incorrect_then_correct_guess() {
        let (out, session) = play(&["apple"], "allee\napple\n");
        assert!(out.contains("🟩🟨⬜⬜🟩"));
        assert!(out.contains("Try again."));
        assert!(out.contains("The word was APPLE (2 guesses)"));
        assert!(session.revealed_positions().is_empty());
    }

    #[test]
    fn hints_until_everything_revealed() {
        let script = "/hint\n".repeat(6);
        let (out, session) = play(&["apple"], &script);
        assert_eq!(out.matches("Revealed letter").count(), 5);
        assert!(out.contains("Every letter is already revealed!"));
        assert!(out.contains("A P P L E  (5 letters)"));
        assert_eq!(session.revealed_positions().len(), 5);
    }

    #[test]
    fn reset_and_unknown_commands() {
        let (out, session) = play(&["apple"], "/hint\n/bogus\n/reset\n/quit\n");
        assert!(out.contains("Unknown command '/bogus'"));
        assert!(out.contains("New word chosen"));
        assert!(session.revealed_positions().is_empty());
    }
}
