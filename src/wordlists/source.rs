//! Random target word selection

use crate::core::Word;
use rand::Rng;
use thiserror::Error;

/// Something a round can draw its target word from
pub trait WordSource {
    /// Pick a target word uniformly at random
    ///
    /// Selection is memoryless: the same word may come up in consecutive
    /// rounds.
    fn pick_random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Word;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordListError {
    #[error("word list contains no usable words")]
    Empty,
}

/// A fixed, non-empty list of target words
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Wrap a list of words
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }

    /// The list compiled into the binary
    ///
    /// # Panics
    /// Panics if the embedded list has no valid words.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(super::loader::words_from_slice(super::WORDS))
            .expect("embedded word list is empty")
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the list holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}

impl WordSource for WordList {
    fn pick_random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        let index = rng.random_range(0..self.words.len());
        self.words[index].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn word_list_rejects_empty() {
        assert_eq!(WordList::new(Vec::new()).unwrap_err(), WordListError::Empty);
    }

    #[test]
    fn embedded_list_is_usable() {
        let list = WordList::embedded();
        assert_eq!(list.len(), crate::wordlists::WORDS_COUNT);
        assert!(!list.is_empty());
    }

    #[test]
    fn pick_returns_member_of_list() {
        let list = WordList::new(words_from_slice(&["apple", "crane", "slate"])).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let word = list.pick_random_word(&mut rng);
            assert!(list.contains(&word));
        }
    }

    #[test]
    fn pick_is_deterministic_for_seed() {
        let list = WordList::embedded();
        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| list.pick_random_word(&mut rng))
                .collect::<Vec<_>>()
        };

        assert_eq!(picks(42), picks(42));
    }

    #[test]
    fn single_word_list_always_picks_it() {
        let list = WordList::new(words_from_slice(&["apple"])).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(list.pick_random_word(&mut rng).text(), "apple");
        assert_eq!(list.pick_random_word(&mut rng).text(), "apple");
    }
}
