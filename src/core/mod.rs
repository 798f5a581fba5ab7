//! Core domain types for the guessing game
//!
//! The scorer and word type are pure and free of I/O; everything else in the
//! crate builds on them.

mod feedback;
mod word;

pub use feedback::{Classification, Feedback, LetterFeedback, score};
pub use word::{Word, WordError};
