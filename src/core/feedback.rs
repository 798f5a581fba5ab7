//! Guess scoring and per-letter feedback
//!
//! Each letter of a guess is classified as:
//! - Correct (right letter, right position)
//! - Present (letter is in the answer, wrong position)
//! - Absent (letter is not in the answer, accounting for multiplicity)

use rustc_hash::FxHashMap;
use std::fmt;
use std::ops::Index;

/// Verdict for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    Correct,
    Present,
    Absent,
}

impl Classification {
    /// Single-character symbol: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Square emoji used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// A classification paired with the letter it describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterFeedback {
    pub classification: Classification,
    pub letter: char,
}

impl LetterFeedback {
    #[must_use]
    pub const fn new(classification: Classification, letter: char) -> Self {
        Self {
            classification,
            letter,
        }
    }
}

/// Ordered feedback for a whole guess, one entry per guessed letter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Feedback(Vec<LetterFeedback>);

impl Feedback {
    /// Number of classified letters (always the guess length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every letter is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .iter()
                .all(|lf| lf.classification == Classification::Correct)
    }

    /// Count the letters with the given classification
    #[must_use]
    pub fn count(&self, classification: Classification) -> usize {
        self.0
            .iter()
            .filter(|lf| lf.classification == classification)
            .count()
    }

    /// Classifications only, in guess order
    pub fn classifications(&self) -> impl Iterator<Item = Classification> + '_ {
        self.0.iter().map(|lf| lf.classification)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LetterFeedback> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[LetterFeedback] {
        &self.0
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.classifications().map(Classification::emoji).collect()
    }

    /// Convert to a symbol string like "GY-GY"
    #[must_use]
    pub fn to_symbols(&self) -> String {
        self.classifications().map(Classification::symbol).collect()
    }
}

impl Index<usize> for Feedback {
    type Output = LetterFeedback;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a LetterFeedback;
    type IntoIter = std::slice::Iter<'a, LetterFeedback>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Score `guess` against `answer`
///
/// Repeated letters are handled by tracking how many of each letter the
/// answer still has to give out:
/// 1. First pass: exact position matches become `Correct` and consume a letter
/// 2. Second pass: remaining letters become `Present` while supply lasts,
///    lowest index first
///
/// The result always has one entry per letter of `guess`. A length mismatch
/// is not an error; positions past the shorter word simply never match.
///
/// # Examples
/// ```
/// use wordle_hint::core::{Classification::*, LetterFeedback, score};
///
/// let feedback = score("allee", "apple");
/// assert_eq!(
///     feedback.as_slice(),
///     &[
///         LetterFeedback::new(Correct, 'a'),
///         LetterFeedback::new(Present, 'l'),
///         LetterFeedback::new(Absent, 'l'),
///         LetterFeedback::new(Absent, 'e'),
///         LetterFeedback::new(Correct, 'e'),
///     ]
/// );
/// ```
#[must_use]
pub fn score(guess: &str, answer: &str) -> Feedback {
    let guess: Vec<char> = guess.chars().collect();
    let answer: Vec<char> = answer.chars().collect();

    let mut result: Vec<LetterFeedback> = guess
        .iter()
        .map(|&letter| LetterFeedback::new(Classification::Absent, letter))
        .collect();

    let mut remaining: FxHashMap<char, usize> = FxHashMap::default();
    for &letter in &answer {
        *remaining.entry(letter).or_insert(0) += 1;
    }

    // First pass: exact matches
    for (i, (&g, &a)) in guess.iter().zip(&answer).enumerate() {
        if g == a {
            result[i].classification = Classification::Correct;
            if let Some(count) = remaining.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: displaced matches
    for lf in &mut result {
        if lf.classification == Classification::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&lf.letter)
            && *count > 0
        {
            lf.classification = Classification::Present;
            *count -= 1;
        }
    }

    Feedback(result)
}
