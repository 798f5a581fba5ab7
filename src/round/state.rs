//! Round state value object
//!
//! Holds the target word for the current round and the positions already
//! revealed as hints.

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::collections::BTreeSet;

/// The target word of one round plus the hint positions revealed so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    target: Word,
    revealed: BTreeSet<usize>,
}

impl RoundState {
    /// Start a round on `target` with nothing revealed
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            revealed: BTreeSet::new(),
        }
    }

    /// Rebuild a round from stored parts
    ///
    /// Positions outside the target are dropped.
    #[must_use]
    pub fn with_revealed(target: Word, revealed: impl IntoIterator<Item = usize>) -> Self {
        let len = target.len();
        Self {
            revealed: revealed.into_iter().filter(|&i| i < len).collect(),
            target,
        }
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn revealed(&self) -> &BTreeSet<usize> {
        &self.revealed
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    /// Positions not yet revealed, ascending
    #[must_use]
    pub fn unrevealed_positions(&self) -> Vec<usize> {
        (0..self.target.len())
            .filter(|i| !self.revealed.contains(i))
            .collect()
    }

    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.revealed.len() >= self.target.len()
    }

    /// Reveal one unrevealed position chosen uniformly at random
    ///
    /// Returns the newly revealed position, or `None` (leaving the state
    /// untouched) once every position is already revealed.
    pub fn reveal_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        let unrevealed = self.unrevealed_positions();
        let &position = unrevealed.choose(rng)?;
        self.revealed.insert(position);
        Some(position)
    }

    /// Target with revealed letters shown and the rest as `_`
    ///
    /// ```
    /// use wordle_hint::core::Word;
    /// use wordle_hint::round::RoundState;
    ///
    /// let round = RoundState::with_revealed(Word::new("apple").unwrap(), [0, 3]);
    /// assert_eq!(round.hint_display(), "a _ _ l _");
    /// ```
    #[must_use]
    pub fn hint_display(&self) -> String {
        self.target
            .letters()
            .enumerate()
            .map(|(i, letter)| {
                if self.revealed.contains(&i) {
                    letter.to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn round(word: &str) -> RoundState {
        RoundState::new(Word::new(word).unwrap())
    }

    #[test]
    fn new_round_reveals_nothing() {
        let state = round("apple");
        assert!(state.revealed().is_empty());
        assert_eq!(state.unrevealed_positions(), vec![0, 1, 2, 3, 4]);
        assert_eq!(state.hint_display(), "_ _ _ _ _");
        assert!(!state.is_fully_revealed());
    }

    #[test]
    fn with_revealed_drops_out_of_range_positions() {
        let state = RoundState::with_revealed(Word::new("apple").unwrap(), [1, 9, 4]);
        assert_eq!(state.revealed().iter().copied().collect::<Vec<_>>(), [1, 4]);
    }

    #[test]
    fn reveal_hint_adds_one_new_position() {
        let mut state = round("apple");
        let mut rng = StdRng::seed_from_u64(3);

        let position = state.reveal_hint(&mut rng).unwrap();
        assert!(position < 5);
        assert_eq!(state.revealed().len(), 1);
        assert!(state.revealed().contains(&position));
    }

    #[test]
    fn reveal_hint_never_repeats_until_full() {
        let mut state = round("apple");
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = BTreeSet::new();

        for _ in 0..5 {
            let position = state.reveal_hint(&mut rng).unwrap();
            assert!(seen.insert(position), "position {position} revealed twice");
        }

        assert!(state.is_fully_revealed());
        assert_eq!(state.hint_display(), "a p p l e");
    }

    #[test]
    fn reveal_hint_is_idempotent_when_full() {
        let mut state = RoundState::with_revealed(Word::new("apple").unwrap(), 0..5);
        let before = state.clone();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..3 {
            assert_eq!(state.reveal_hint(&mut rng), None);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn reveal_hint_picks_only_remaining_position() {
        let mut state = RoundState::with_revealed(Word::new("apple").unwrap(), [0, 1, 3, 4]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(state.reveal_hint(&mut rng), Some(2));
    }

    #[test]
    fn reveal_hint_covers_every_position_across_seeds() {
        let mut hit = BTreeSet::new();
        for seed in 0..64 {
            let mut state = round("apple");
            let mut rng = StdRng::seed_from_u64(seed);
            hit.extend(state.reveal_hint(&mut rng));
        }
        assert_eq!(hit.len(), 5);
    }
}
