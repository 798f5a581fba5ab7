//! Wordle Hint
//!
//! A Wordle-style guessing game: a secret word is chosen, guesses are scored
//! letter by letter, and hints reveal single letters of the answer.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hint::core::{Classification, score};
//!
//! let feedback = score("allee", "apple");
//! assert_eq!(feedback[0].classification, Classification::Correct);
//! assert_eq!(feedback.to_symbols(), "GY--G");
//! ```
//!
//! Rounds are plain values passed through the lifecycle functions:
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_hint::round::{request_hint, start_round, submit_guess};
//! use wordle_hint::wordlists::WordList;
//!
//! let words = WordList::embedded();
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let round = start_round(&words, &mut rng);
//! let (round, hint) = request_hint(Some(round), &words, &mut rng);
//! assert!(hint.is_some());
//!
//! let guess = round.target().text().to_string();
//! let (next, report) = submit_guess(Some(round), &guess, &words, &mut rng);
//! assert!(report.unwrap().is_solved());
//! assert!(next.revealed().is_empty());
//! ```

// Core domain types
pub mod core;

// Round state, hints and lifecycle
pub mod round;

// Session storage and game driver
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
