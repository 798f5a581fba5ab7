//! Word lists for the game
//!
//! Provides the embedded target list, a file loader, and random selection.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{WordList, WordListError, WordSource};
