//! Command implementations

pub mod analyze;
pub mod score;
pub mod simple;

pub use analyze::{AnalysisResult, analyze_guess};
pub use score::{ScoreResult, score_pair};
pub use simple::{run_simple, run_simple_with};
