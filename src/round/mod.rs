//! Rounds: target word, hint revelation, and lifecycle transitions

pub mod lifecycle;
mod state;

pub use lifecycle::{
    GuessError, GuessReport, Outcome, ensure_round, request_hint, reset, start_round,
    submit_guess,
};
pub use state::RoundState;
