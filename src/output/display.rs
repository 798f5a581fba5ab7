//! Display functions for command results

use super::formatters::{colored_feedback, create_progress_bar, feedback_to_emoji};
use crate::commands::{AnalysisResult, ScoreResult};
use colored::Colorize;

/// Print the feedback for one guess/answer pair
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess:  {}",
        result.guess.to_uppercase().bright_white().bold()
    );
    println!(
        "Answer: {}",
        result.answer.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_feedback(&result.feedback));
    println!(
        "  {}  {}",
        feedback_to_emoji(&result.feedback),
        result.feedback.to_symbols()
    );

    if !result.length_matches {
        println!(
            "\n{}",
            format!(
                "⚠ Lengths differ ({} vs {}); play would reject this guess",
                result.guess.chars().count(),
                result.answer.len()
            )
            .yellow()
        );
    } else if result.feedback.is_solved() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} of {} words ({} letters):",
        result.comparable_words,
        result.total_words,
        result.guess.len()
    );
    if !result.in_word_list {
        println!("   {}", "(guess is not itself in the word list)".bright_black());
    }
    println!(
        "   Entropy:     {}",
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} words share your feedback",
        result.expected_remaining
    );
    println!("   Worst case:  {} words", result.worst_case());
    println!("   Outcomes:    {} distinct", result.buckets.len());

    if result.buckets.is_empty() {
        return;
    }

    println!("\n📈 {}", "Most common feedback:".bright_cyan().bold());
    let largest = result.worst_case() as f64;
    for (symbols, count) in result.buckets.iter().take(top) {
        let bar = create_progress_bar(*count as f64, largest, 30);
        println!("   {symbols}  {} {count:5}", bar.green());
    }
}
