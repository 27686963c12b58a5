//! Guess checking command
//!
//! Scores a single guess against a given target without playing a game.

use crate::core::{Feedback, Word};

/// Result of checking a guess
pub struct CheckResult {
    pub target: String,
    pub feedback: Feedback,
}

/// Classify `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult, String> {
    let target = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    if guess.len() != target.len() {
        return Err(format!(
            "Guess has {} letters but the target has {}",
            guess.len(),
            target.len()
        ));
    }

    Ok(CheckResult {
        target: target.text().to_string(),
        feedback: Feedback::calculate(guess.text(), &target),
    })
}
