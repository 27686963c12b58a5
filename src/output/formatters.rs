//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyboardHighlight, LetterClass};
use colored::{ColoredString, Colorize};

/// Format feedback as emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.to_emoji()
}

/// Uppercase letter on a background matching its classification
#[must_use]
pub fn colored_letter(letter: char, class: LetterClass) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match class {
        LetterClass::Exact => text.black().on_green().bold(),
        LetterClass::Present => text.black().on_yellow().bold(),
        LetterClass::Absent => text.white().on_bright_black(),
    }
}

/// A guessed row as coloured tiles
#[must_use]
pub fn colored_row(feedback: &Feedback) -> String {
    feedback
        .letters()
        .map(|(letter, class)| colored_letter(letter, class).to_string())
        .collect()
}

/// One line per keyboard cap set, e.g. "Exact: A C"
#[must_use]
pub fn keyboard_summary(keyboard: &KeyboardHighlight) -> Vec<String> {
    [
        ("Exact", LetterClass::Exact),
        ("Present", LetterClass::Present),
        ("Absent", LetterClass::Absent),
    ]
    .into_iter()
    .filter_map(|(name, class)| {
        let caps = keyboard.caps(class);
        if caps.is_empty() {
            return None;
        }
        let letters: Vec<String> = caps
            .iter()
            .map(|c| c.to_ascii_uppercase().to_string())
            .collect();
        Some(format!("{name}: {}", letters.join(" ")))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grid, Word};

    #[test]
    fn emoji_for_partial_match() {
        let target = Word::new("crane").unwrap();
        let feedback = Feedback::calculate("react", &target);
        assert_eq!(feedback_to_emoji(&feedback), "🟨🟨🟩🟨⬛");
    }

    #[test]
    fn colored_row_contains_uppercase_letters() {
        colored::control::set_override(false);
        let target = Word::new("crane").unwrap();
        let feedback = Feedback::calculate("slate", &target);
        assert_eq!(colored_row(&feedback), " S  L  A  T  E ");
    }

    #[test]
    fn keyboard_summary_lists_non_empty_sets() {
        let target = Word::new("crane").unwrap();
        let mut grid = Grid::new(1, 5);
        for (col, letter) in "slate".chars().enumerate() {
            grid.set(0, col, letter);
        }
        let keyboard = KeyboardHighlight::recompute(&grid, 1, &target);

        assert_eq!(
            keyboard_summary(&keyboard),
            vec!["Exact: A E".to_string(), "Absent: L S T".to_string()]
        );
    }

    #[test]
    fn keyboard_summary_empty() {
        assert!(keyboard_summary(&KeyboardHighlight::default()).is_empty());
    }
}
