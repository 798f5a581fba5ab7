//! Session storage and the game driver built on it
//!
//! A `SessionStore` keeps one player's round between requests. `Game` loads
//! the round from a store, applies a lifecycle transition, and writes the
//! result back.

mod memory;

pub use memory::MemorySession;

use crate::core::Word;
use crate::round::{self, GuessError, GuessReport, RoundState};
use crate::wordlists::WordSource;
use rand::Rng;
use std::collections::BTreeSet;

/// Per-player storage for the active round
pub trait SessionStore {
    /// Target word of the active round, if any
    fn target_word(&self) -> Option<Word>;

    fn set_target_word(&mut self, word: Word);

    fn revealed_positions(&self) -> BTreeSet<usize>;

    fn add_revealed_position(&mut self, position: usize);

    /// Forget the active round entirely
    fn clear_round(&mut self);

    /// Assemble the stored round, or `None` between rounds
    fn load_round(&self) -> Option<RoundState> {
        self.target_word()
            .map(|target| RoundState::with_revealed(target, self.revealed_positions()))
    }

    /// Replace whatever is stored with `round`
    fn store_round(&mut self, round: &RoundState) {
        self.clear_round();
        self.set_target_word(round.target().clone());
        for &position in round.revealed() {
            self.add_revealed_position(position);
        }
    }
}

/// What the presentation layer shows about the active round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    pub word_length: usize,
    pub hint_display: String,
    pub hints_used: usize,
    pub fully_revealed: bool,
}

impl From<&RoundState> for RoundView {
    fn from(round: &RoundState) -> Self {
        Self {
            word_length: round.word_length(),
            hint_display: round.hint_display(),
            hints_used: round.revealed().len(),
            fully_revealed: round.is_fully_revealed(),
        }
    }
}

/// Drives rounds for one session
pub struct Game<'w, S, W: ?Sized, R> {
    store: S,
    words: &'w W,
    rng: R,
}

impl<'w, S, W, R> Game<'w, S, W, R>
where
    S: SessionStore,
    W: WordSource + ?Sized,
    R: Rng,
{
    #[must_use]
    pub fn new(store: S, words: &'w W, rng: R) -> Self {
        Self { store, words, rng }
    }

    /// Submit a guess; input is trimmed and lowercased first
    ///
    /// # Errors
    /// Returns `GuessError::WrongLength` when the guess length differs from
    /// the target word. The round is left unchanged in that case.
    pub fn guess(&mut self, input: &str) -> Result<GuessReport, GuessError> {
        let guess = input.trim().to_lowercase();
        let (next, result) =
            round::submit_guess(self.store.load_round(), &guess, self.words, &mut self.rng);
        self.store.store_round(&next);
        result
    }

    /// Reveal one more letter; `None` once every letter is shown or when no
    /// round was active yet
    pub fn hint(&mut self) -> Option<usize> {
        let (next, revealed) =
            round::request_hint(self.store.load_round(), self.words, &mut self.rng);
        self.store.store_round(&next);
        revealed
    }

    /// Throw away the current round and start another
    pub fn reset(&mut self) -> RoundView {
        self.store.clear_round();
        let next = round::reset(self.words, &mut self.rng);
        self.store.store_round(&next);
        RoundView::from(&next)
    }

    /// Current round as displayed, starting one if needed
    pub fn view(&mut self) -> RoundView {
        let current = round::ensure_round(self.store.load_round(), self.words, &mut self.rng);
        self.store.store_round(&current);
        RoundView::from(&current)
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::Outcome;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn list(words: &[&str]) -> WordList {
        WordList::new(words_from_slice(words)).unwrap()
    }

    #[test]
    fn view_starts_round_lazily() {
        let words = list(&["apple"]);
        let mut game = Game::new(MemorySession::default(), &words, StdRng::seed_from_u64(1));

        assert!(game.store().target_word().is_none());
        let view = game.view();
        assert_eq!(view.word_length, 5);
        assert_eq!(view.hint_display, "_ _ _ _ _");
        assert_eq!(view.hints_used, 0);
        assert!(!view.fully_revealed);
        assert_eq!(game.store().target_word().unwrap().text(), "apple");
    }

    #[test]
    fn hint_on_empty_store_only_starts_round() {
        let words = list(&["apple"]);
        let mut game = Game::new(MemorySession::default(), &words, StdRng::seed_from_u64(1));

        assert_eq!(game.hint(), None);
        assert_eq!(game.store().target_word().unwrap().text(), "apple");
        assert!(game.store().revealed_positions().is_empty());
    }

    #[test]
    fn guess_is_normalized() {
        let words = list(&["apple"]);
        let mut game = Game::new(MemorySession::default(), &words, StdRng::seed_from_u64(1));

        let report = game.guess("  APPLE \n").unwrap();
        assert!(report.is_solved());
        assert_eq!(report.guess, "apple");
    }

    #[test]
    fn wrong_length_leaves_store_unchanged() {
        let words = list(&["apple"]);
        let mut game = Game::new(MemorySession::default(), &words, StdRng::seed_from_u64(1));
        game.view();
        game.hint();
        let before = game.store().load_round();

        assert!(game.guess("apples").is_err());
        assert_eq!(game.store().load_round(), before);
    }

    #[test]
    fn hints_persist_between_calls() {
        let words = list(&["apple"]);
        let mut game = Game::new(MemorySession::default(), &words, StdRng::seed_from_u64(8));
        game.view();

        for _ in 0..5 {
            assert!(game.hint().is_some());
        }
        assert_eq!(game.hint(), None);
        assert_eq!(game.store().revealed_positions().len(), 5);
        let view = game.view();
        assert_eq!(view.hint_display, "a p p l e");
        assert!(view.fully_revealed);
    }

    #[test]
    fn solving_clears_hints_for_next_round() {
        let words = list(&["apple"]);
        let mut game = Game::new(MemorySession::default(), &words, StdRng::seed_from_u64(8));
        game.view();
        game.hint();
        game.hint();

        let report = game.guess("apple").unwrap();
        assert_eq!(
            report.outcome,
            Outcome::Solved {
                answer: Word::new("apple").unwrap()
            }
        );
        assert!(game.store().revealed_positions().is_empty());
        assert!(game.store().target_word().is_some());
    }

    #[test]
    fn incorrect_guess_keeps_hints() {
        let words = list(&["apple"]);
        let mut game = Game::new(MemorySession::default(), &words, StdRng::seed_from_u64(8));
        game.view();
        let position = game.hint().unwrap();

        let report = game.guess("crane").unwrap();
        assert_eq!(report.outcome, Outcome::TryAgain);
        assert_eq!(
            game.store().revealed_positions(),
            BTreeSet::from([position])
        );
    }

    #[test]
    fn reset_starts_over() {
        let words = list(&["apple", "crane"]);
        let mut game = Game::new(MemorySession::default(), &words, StdRng::seed_from_u64(3));
        game.view();
        game.hint();

        let view = game.reset();
        assert_eq!(view.hints_used, 0);
        assert!(game.store().revealed_positions().is_empty());
        assert!(words.contains(&game.store().target_word().unwrap()));
    }
}
