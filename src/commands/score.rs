//! Single-pair scoring command

use crate::core::{Feedback, Word, WordError, score};

/// Result of scoring one guess against one answer
pub struct ScoreResult {
    pub guess: String,
    pub answer: String,
    pub feedback: Feedback,
    pub length_matches: bool,
}

/// Score `guess` against `answer`
///
/// Both are trimmed and lowercased. Unlike play, a length mismatch is
/// scored anyway and flagged in the result.
///
/// # Errors
///
/// Returns `WordError` if the answer is not a valid word.
pub fn score_pair(guess: &str, answer: &str) -> Result<ScoreResult, WordError> {
    let answer = Word::new(answer)?;
    let guess = guess.trim().to_lowercase();
    let feedback = score(&guess, answer.text());

    Ok(ScoreResult {
        length_matches: guess.chars().count() == answer.len(),
        guess,
        answer: answer.text().to_string(),
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_pair_normalizes_input() {
        let result = score_pair(" ALLEE ", "Apple").unwrap();
        assert_eq!(result.guess, "allee");
        assert_eq!(result.answer, "apple");
        assert_eq!(result.feedback.to_symbols(), "GY--G");
        assert!(result.length_matches);
    }

    #[test]
    fn score_pair_flags_length_mismatch() {
        let result = score_pair("app", "apple").unwrap();
        assert!(!result.length_matches);
        assert_eq!(result.feedback.to_symbols(), "GGG");
    }

    #[test]
    fn score_pair_rejects_bad_answer() {
        assert!(score_pair("apple", "").is_err());
        assert!(score_pair("apple", "4pple").is_err());
    }
}
