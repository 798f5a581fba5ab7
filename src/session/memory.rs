//! In-memory session store

use super::SessionStore;
use crate::core::Word;
use std::collections::BTreeSet;

/// Session state held in process memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySession {
    target: Option<Word>,
    revealed: BTreeSet<usize>,
}

impl SessionStore for MemorySession {
    fn target_word(&self) -> Option<Word> {
        self.target.clone()
    }

    fn set_target_word(&mut self, word: Word) {
        self.target = Some(word);
    }

    fn revealed_positions(&self) -> BTreeSet<usize> {
        self.revealed.clone()
    }

    fn add_revealed_position(&mut self, position: usize) {
        self.revealed.insert(position);
    }

    fn clear_round(&mut self) {
        self.target = None;
        self.revealed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::RoundState;

    #[test]
    fn empty_session_has_no_round() {
        let session = MemorySession::default();
        assert!(session.load_round().is_none());
        assert!(session.revealed_positions().is_empty());
    }

    #[test]
    fn store_and_load_round() {
        let mut session = MemorySession::default();
        let round = RoundState::with_revealed(Word::new("apple").unwrap(), [1, 3]);

        session.store_round(&round);
        assert_eq!(session.load_round(), Some(round));
    }

    #[test]
    fn store_round_replaces_previous_hints() {
        let mut session = MemorySession::default();
        session.store_round(&RoundState::with_revealed(
            Word::new("apple").unwrap(),
            [0, 1, 2],
        ));

        let fresh = RoundState::new(Word::new("crane").unwrap());
        session.store_round(&fresh);
        assert_eq!(session.load_round(), Some(fresh));
    }

    #[test]
    fn clear_round_forgets_everything() {
        let mut session = MemorySession::default();
        session.set_target_word(Word::new("apple").unwrap());
        session.add_revealed_position(2);
        session.add_revealed_position(2);
        assert_eq!(session.revealed_positions().len(), 1);

        session.clear_round();
        assert_eq!(session, MemorySession::default());
    }
}
