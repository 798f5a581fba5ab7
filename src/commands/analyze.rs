//! Guess analysis command
//!
//! Scores one guess against every word in the list and summarizes the
//! feedback it would produce.

use crate::core::{Word, WordError, score};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Result of analyzing a guess against a word list
pub struct AnalysisResult {
    pub guess: String,
    pub total_words: usize,
    /// Words the guess can be compared with (same length)
    pub comparable_words: usize,
    /// Distinct feedback strings with how many words produce each, most common first
    pub buckets: Vec<(String, usize)>,
    /// Shannon entropy of the feedback distribution in bits
    pub entropy: f64,
    /// Average number of words sharing the feedback you will see
    pub expected_remaining: f64,
    pub in_word_list: bool,
}

impl AnalysisResult {
    /// Largest group of words indistinguishable after this guess
    #[must_use]
    pub fn worst_case(&self) -> usize {
        self.buckets.first().map_or(0, |(_, count)| *count)
    }
}

/// Analyze `guess` against `words`
///
/// Only words of the same length as the guess are scored, since a guess of
/// any other length is rejected before scoring during play.
///
/// # Errors
///
/// Returns `WordError` if `guess` is not a valid word.
pub fn analyze_guess(guess: &str, words: &[Word]) -> Result<AnalysisResult, WordError> {
    let guess = Word::new(guess)?;
    let length = guess.len();

    let counts: FxHashMap<String, usize> = words
        .par_iter()
        .filter(|word| word.len() == length)
        .map(|word| score(guess.text(), word.text()).to_symbols())
        .fold(FxHashMap::default, |mut acc, symbols| {
            *acc.entry(symbols).or_insert(0) += 1;
            acc
        })
        .reduce(FxHashMap::default, |mut a, b| {
            for (symbols, count) in b {
                *a.entry(symbols).or_insert(0) += count;
            }
            a
        });

    let comparable_words: usize = counts.values().sum();
    let entropy = shannon_entropy(&counts, comparable_words);
    let expected_remaining = if comparable_words == 0 {
        0.0
    } else {
        counts.values().map(|&c| (c * c) as f64).sum::<f64>() / comparable_words as f64
    };

    let mut buckets: Vec<(String, usize)> = counts.into_iter().collect();
    buckets.sort_by(|(sa, ca), (sb, cb)| cb.cmp(ca).then_with(|| sa.cmp(sb)));

    tracing::debug!(
        guess = %guess,
        comparable_words,
        buckets = buckets.len(),
        "Analyzed guess"
    );

    Ok(AnalysisResult {
        in_word_list: words.contains(&guess),
        guess: guess.text().to_string(),
        total_words: words.len(),
        comparable_words,
        buckets,
        entropy,
        expected_remaining,
    })
}

/// H = -Σ p * log₂(p)
fn shannon_entropy(counts: &FxHashMap<String, usize>, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
