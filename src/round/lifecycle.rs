//! Round lifecycle transitions
//!
//! A session is either between rounds (`None`) or has a round in progress
//! (`Some(RoundState)`). Every transition takes the current state by value and
//! hands back the next one, so callers decide where state lives.

use super::RoundState;
use crate::core::{Feedback, Word, score};
use crate::wordlists::WordSource;
use rand::Rng;
use thiserror::Error;

/// Rejected guess; the round is left as it was
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guess must be {expected} letters long, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

/// What a scored guess means for the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The guess matched; `answer` is the word of the round that just ended
    Solved { answer: Word },
    TryAgain,
}

/// Feedback for an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub guess: String,
    pub feedback: Feedback,
    pub outcome: Outcome,
}

impl GuessReport {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved { .. })
    }
}

/// Begin a fresh round with an independently chosen target
pub fn start_round<W, R>(words: &W, rng: &mut R) -> RoundState
where
    W: WordSource + ?Sized,
    R: Rng + ?Sized,
{
    let target = words.pick_random_word(rng);
    tracing::debug!(length = target.len(), "Started new round");
    RoundState::new(target)
}

/// Return the active round, starting one if there is none
pub fn ensure_round<W, R>(round: Option<RoundState>, words: &W, rng: &mut R) -> RoundState
where
    W: WordSource + ?Sized,
    R: Rng + ?Sized,
{
    match round {
        Some(round) => round,
        None => start_round(words, rng),
    }
}

/// Score a guess against the active round
///
/// The caller supplies `guess` already trimmed and lowercased. A guess whose
/// length differs from the target is rejected without being scored. A
/// correct guess ends the round and a new one starts immediately, so the
/// returned state belongs to the next round.
pub fn submit_guess<W, R>(
    round: Option<RoundState>,
    guess: &str,
    words: &W,
    rng: &mut R,
) -> (RoundState, Result<GuessReport, GuessError>)
where
    W: WordSource + ?Sized,
    R: Rng + ?Sized,
{
    let round = ensure_round(round, words, rng);

    let expected = round.word_length();
    let actual = guess.chars().count();
    if actual != expected {
        tracing::debug!(expected, actual, "Rejected guess of wrong length");
        return (round, Err(GuessError::WrongLength { expected, actual }));
    }

    let feedback = score(guess, round.target().text());
    tracing::debug!(guess, feedback = %feedback.to_symbols(), "Scored guess");

    if feedback.is_solved() {
        tracing::info!(answer = %round.target(), hints = round.revealed().len(), "Round solved");
        let answer = round.target().clone();
        let next = start_round(words, rng);
        let report = GuessReport {
            guess: guess.to_string(),
            feedback,
            outcome: Outcome::Solved { answer },
        };
        return (next, Ok(report));
    }

    let report = GuessReport {
        guess: guess.to_string(),
        feedback,
        outcome: Outcome::TryAgain,
    };
    (round, Ok(report))
}

/// Reveal one more letter of the active round
///
/// Returns the revealed position, or `None` when everything is already shown.
/// With no active round a fresh one is started and nothing is revealed.
pub fn request_hint<W, R>(
    round: Option<RoundState>,
    words: &W,
    rng: &mut R,
) -> (RoundState, Option<usize>)
where
    W: WordSource + ?Sized,
    R: Rng + ?Sized,
{
    let Some(mut round) = round else {
        return (start_round(words, rng), None);
    };
    let revealed = round.reveal_hint(rng);
    match revealed {
        Some(position) => tracing::debug!(position, "Revealed hint"),
        None => tracing::debug!("All positions already revealed"),
    }
    (round, revealed)
}

/// Abandon the current round and start a new one
pub fn reset<W, R>(words: &W, rng: &mut R) -> RoundState
where
    W: WordSource + ?Sized,
    R: Rng + ?Sized,
{
    tracing::info!("Round reset");
    start_round(words, rng)
}
