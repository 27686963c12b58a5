//! Key dispatch
//!
//! Maps key identifiers onto [`GameState`] transitions.

use super::state::{GameState, Transition};

/// Identifier of the clear (backspace) key on the on-screen keyboard
pub const CLEAR_KEY: &str = "CLEAR";
/// Identifier of the enter key on the on-screen keyboard
pub const ENTER_KEY: &str = "ENTER";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Clear,
    Enter,
}

impl Key {
    /// Parse a key identifier
    ///
    /// Recognizes [`CLEAR_KEY`], [`ENTER_KEY`] and single ASCII letters
    /// (lowercased). Anything else yields `None`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Key;
    ///
    /// assert_eq!(Key::parse("ENTER"), Some(Key::Enter));
    /// assert_eq!(Key::parse("Q"), Some(Key::Letter('q')));
    /// assert_eq!(Key::parse("7"), None);
    /// ```
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            CLEAR_KEY => Some(Self::Clear),
            ENTER_KEY => Some(Self::Enter),
            _ => {
                let mut chars = id.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::letter(c),
                    _ => None,
                }
            }
        }
    }

    /// A letter key, if `c` is an ASCII letter
    #[must_use]
    pub fn letter(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then_some(Self::Letter(c.to_ascii_lowercase()))
    }

    /// Identifier as shown on the on-screen keyboard
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(c) => c.to_ascii_uppercase().to_string(),
            Self::Clear => CLEAR_KEY.to_string(),
            Self::Enter => ENTER_KEY.to_string(),
        }
    }
}

/// Forwards keys to the game, dropping letters once the row is full
#[derive(Debug, Clone, Copy, Default)]
pub struct InputController;

impl InputController {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    pub fn press(self, game: &mut GameState, key: Key) -> Transition {
        match key {
            Key::Clear => game.clear(),
            Key::Enter => game.enter(),
            Key::Letter(_) if game.is_active_row_full() => Transition::Ignored,
            Key::Letter(c) => game.submit_letter(c),
        }
    }

    /// Press a key by identifier; unknown identifiers are ignored
    pub fn press_id(self, game: &mut GameState, id: &str) -> Transition {
        Key::parse(id).map_or(Transition::Ignored, |key| self.press(game, key))
    }

    /// Type every letter of `word` then press enter
    ///
    /// Returns the transition produced by the enter key.
    pub fn submit_word(self, game: &mut GameState, word: &str) -> Transition {
        for key in word.chars().filter_map(Key::letter) {
            self.press(game, key);
        }
        self.press(game, Key::Enter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{DEFAULT_MAX_TRIES, GameStatus};

    fn game() -> GameState {
        GameState::new(Word::new("crane").unwrap(), DEFAULT_MAX_TRIES)
    }

    #[test]
    fn parse_designated_keys() {
        assert_eq!(Key::parse(CLEAR_KEY), Some(Key::Clear));
        assert_eq!(Key::parse(ENTER_KEY), Some(Key::Enter));
        assert_eq!(Key::parse("a"), Some(Key::Letter('a')));
        assert_eq!(Key::parse("A"), Some(Key::Letter('a')));
    }

    #[test]
    fn parse_rejects_unknown_identifiers() {
        assert_eq!(Key::parse(""), None);
        assert_eq!(Key::parse("ab"), None);
        assert_eq!(Key::parse("1"), None);
        assert_eq!(Key::parse("enter"), None);
    }

    #[test]
    fn labels() {
        assert_eq!(Key::Letter('q').label(), "Q");
        assert_eq!(Key::Enter.label(), "ENTER");
    }

    #[test]
    fn press_routes_keys() {
        let mut game = game();
        let input = InputController::new();

        assert_eq!(input.press(&mut game, Key::Letter('c')), Transition::Edited);
        assert_eq!(game.grid().get(0, 0), Some('c'));
        assert_eq!(input.press(&mut game, Key::Clear), Transition::Edited);
        assert_eq!(game.grid().get(0, 0), None);
        assert_eq!(input.press(&mut game, Key::Enter), Transition::Ignored);
    }

    #[test]
    fn extra_letters_after_full_row_are_dropped() {
        let mut game = game();
        let input = InputController::new();
        for id in ["S", "L", "A", "T", "E", "X", "Y"] {
            input.press_id(&mut game, id);
        }
        assert_eq!(game.grid().row_word(0).as_deref(), Some("slate"));
        assert_eq!(input.press_id(&mut game, ENTER_KEY), Transition::RowCommitted);
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut game = game();
        assert_eq!(
            InputController::new().press_id(&mut game, "F1"),
            Transition::Ignored
        );
    }

    #[test]
    fn submit_word_plays_a_full_turn() {
        let mut game = game();
        let input = InputController::new();
        assert_eq!(input.submit_word(&mut game, "slate"), Transition::RowCommitted);
        assert!(matches!(
            input.submit_word(&mut game, "CRANE"),
            Transition::Finished(_)
        ));
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn input_after_loss_is_ignored() {
        let mut game = GameState::new(Word::new("crane").unwrap(), 1);
        let input = InputController::new();
        assert!(matches!(
            input.submit_word(&mut game, "slate"),
            Transition::Finished(_)
        ));
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(input.press(&mut game, Key::Letter('a')), Transition::Ignored);
    }
}
