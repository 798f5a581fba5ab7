//! TUI application state and logic

use crate::core::Feedback;
use crate::round::{GuessReport, Outcome};
use crate::session::{Game, MemorySession, RoundView};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Keep only this many messages
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub game: Game<'a, MemorySession, WordList, StdRng>,
    pub view: RoundView,
    pub history: Vec<HistoryEntry>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: String,
    pub feedback: Feedback,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub hints_used: usize,
    /// Index = guesses taken; the last bucket collects everything longer
    pub guess_distribution: [usize; 7],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a WordList, rng: StdRng) -> Self {
        let mut game = Game::new(MemorySession::default(), words, rng);
        let view = game.view();

        Self {
            game,
            view,
            history: Vec::new(),
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess the hidden word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "TAB reveals a letter, Ctrl+R picks a new word.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.game.guess(&input) {
            Err(e) => {
                self.input_buffer = input;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
            Ok(report) => self.record_report(report),
        }
        self.view = self.game.view();
    }

    fn record_report(&mut self, report: GuessReport) {
        self.history.push(HistoryEntry {
            guess: report.guess,
            feedback: report.feedback,
        });

        match report.outcome {
            Outcome::Solved { answer } => {
                let guess_count = self.history.len();
                self.stats.rounds_played += 1;
                self.stats.rounds_won += 1;
                self.stats.guess_distribution[guess_count.min(6)] += 1;
                self.input_mode = InputMode::WinCelebration;

                let celebration = match guess_count {
                    1 => "🎯 HOLE IN ONE! 🌟".to_string(),
                    2..=6 => format!("🎉 Solved in {guess_count} guesses!"),
                    _ => "🎊 SOLVED! 🎊".to_string(),
                };
                self.add_message(&celebration, MessageStyle::Success);
                self.add_message(
                    &format!("The word was {}.", answer.text().to_uppercase()),
                    MessageStyle::Success,
                );
                self.add_message("Press Enter for the next word or 'q' to quit.", MessageStyle::Info);
            }
            Outcome::TryAgain => {
                self.add_message("Try again.", MessageStyle::Info);
            }
        }
    }

    pub fn request_hint(&mut self) {
        if self.view.fully_revealed {
            self.add_message("Every letter is already revealed!", MessageStyle::Error);
            return;
        }
        match self.game.hint() {
            Some(position) => {
                self.stats.hints_used += 1;
                self.add_message(
                    &format!("Revealed letter {}", position + 1),
                    MessageStyle::Info,
                );
            }
            None => self.add_message("Every letter is already revealed!", MessageStyle::Error),
        }
        self.view = self.game.view();
    }

    /// Abandon the current word and start another
    pub fn reset(&mut self) {
        if !self.history.is_empty() && self.input_mode == InputMode::Guessing {
            self.stats.rounds_played += 1;
        }
        self.view = self.game.reset();
        self.start_next_round("New word chosen!");
    }

    /// Clear the board after a win; the game already picked the next word
    pub fn continue_after_win(&mut self) {
        self.view = self.game.view();
        self.start_next_round("Next word! Good luck.");
    }

    fn start_next_round(&mut self, message: &str) {
        self.history.clear();
        self.input_buffer.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(message, MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char('n') => self.continue_after_win(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.reset();
                }
                KeyCode::Tab => self.request_hint(),
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < self.view.word_length {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("TUI exited with error: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn words(list: &[&str]) -> WordList {
        WordList::new(words_from_slice(list)).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_is_limited_to_word_length() {
        let list = words(&["apple"]);
        let mut app = App::new(&list, StdRng::seed_from_u64(1));

        for c in "abcdefg".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.input_buffer, "abcde");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "abcd");
    }

    #[test]
    fn short_guess_keeps_input_and_reports_error() {
        let list = words(&["apple"]);
        let mut app = App::new(&list, StdRng::seed_from_u64(1));

        type_word(&mut app, "app");
        assert_eq!(app.input_buffer, "app");
        assert!(app.history.is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn wrong_guess_goes_to_history() {
        let list = words(&["apple"]);
        let mut app = App::new(&list, StdRng::seed_from_u64(1));

        type_word(&mut app, "allee");
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].feedback.to_symbols(), "GY--G");
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn win_updates_stats_and_continues() {
        let list = words(&["apple"]);
        let mut app = App::new(&list, StdRng::seed_from_u64(1));

        type_word(&mut app, "crane");
        type_word(&mut app, "apple");
        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.rounds_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.history.is_empty());
    }

    #[test]
    fn tab_reveals_hints() {
        let list = words(&["apple"]);
        let mut app = App::new(&list, StdRng::seed_from_u64(1));

        for _ in 0..6 {
            press(&mut app, KeyCode::Tab);
        }
        assert_eq!(app.stats.hints_used, 5);
        assert_eq!(app.view.hint_display, "a p p l e");
        assert_eq!(app.view.hints_used, 5);
        assert!(app.view.fully_revealed);
        assert_eq!(
            app.messages.last().unwrap().text,
            "Every letter is already revealed!"
        );
    }

    #[test]
    fn ctrl_r_resets_round() {
        let list = words(&["apple"]);
        let mut app = App::new(&list, StdRng::seed_from_u64(1));
        press(&mut app, KeyCode::Tab);
        type_word(&mut app, "crane");

        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert!(app.history.is_empty());
        assert_eq!(app.view.hints_used, 0);
        assert_eq!(app.stats.rounds_played, 1);
        assert_eq!(app.stats.rounds_won, 0);
    }

    #[test]
    fn quit_keys() {
        let list = words(&["apple"]);
        let mut app = App::new(&list, StdRng::seed_from_u64(1));
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(&list, StdRng::seed_from_u64(1));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
