//! Turn state machine
//!
//! `GameState` owns the grid and cursor, applies letter/clear/enter
//! transitions and reports what happened through [`Transition`]. Inputs that
//! have no meaning in the current state are ignored, never signalled.

use crate::core::{Cursor, Grid, KeyboardHighlight, LetterClass, Word, classify_letter};

/// Tries allowed per game
pub const DEFAULT_MAX_TRIES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Won { tries: usize },
    Lost { answer: String },
}

/// A choice offered by the end-of-game notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeAction {
    Dismiss,
    NewGame,
    Retry,
}

impl NoticeAction {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dismiss => "Cancel",
            Self::NewGame => "New word",
            Self::Retry => "Try again",
        }
    }

    /// True for the actions that start a fresh game
    #[must_use]
    pub const fn starts_new_game(self) -> bool {
        matches!(self, Self::NewGame | Self::Retry)
    }
}

/// Emitted once when the game reaches `Won` or `Lost`
///
/// Carries the outcome and the two actions the player can pick; presenting
/// it is up to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndOfGameNotice {
    pub outcome: GameOutcome,
    pub actions: [NoticeAction; 2],
}

impl EndOfGameNotice {
    #[must_use]
    pub fn new(outcome: GameOutcome) -> Self {
        let follow_up = match outcome {
            GameOutcome::Won { .. } => NoticeAction::NewGame,
            GameOutcome::Lost { .. } => NoticeAction::Retry,
        };
        Self {
            outcome,
            actions: [NoticeAction::Dismiss, follow_up],
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self.outcome {
            GameOutcome::Won { .. } => "Hooray! You've won",
            GameOutcome::Lost { .. } => "Ooops! You've lost",
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match &self.outcome {
            GameOutcome::Won { tries } => format!(
                "Nice one, you guessed the word in {tries} {}. Try out another one.",
                if *tries == 1 { "try" } else { "tries" }
            ),
            GameOutcome::Lost { answer } => format!(
                "You were not able to guess {}. Try again.",
                answer.to_uppercase()
            ),
        }
    }
}

/// Result of applying one input to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The input had no effect
    Ignored,
    /// A cell of the active row changed
    Edited,
    /// The active row was scored and play moved to the next row
    RowCommitted,
    /// The game ended
    Finished(EndOfGameNotice),
}

/// Full state of one game
#[derive(Debug, Clone)]
pub struct GameState {
    target: Word,
    grid: Grid,
    cursor: Cursor,
    status: GameStatus,
    keyboard: KeyboardHighlight,
    max_tries: usize,
}

impl GameState {
    /// Start a game; `max_tries` is raised to at least 1
    #[must_use]
    pub fn new(target: Word, max_tries: usize) -> Self {
        let max_tries = max_tries.max(1);
        Self {
            grid: Grid::new(max_tries, target.len()),
            target,
            cursor: Cursor::default(),
            status: GameStatus::Playing,
            keyboard: KeyboardHighlight::default(),
            max_tries,
        }
    }

    /// Write a letter at the cursor
    ///
    /// Ignored once the game is over or the active row is full. The cursor
    /// stops on the last column; submitting the row needs an explicit enter.
    pub fn submit_letter(&mut self, letter: char) -> Transition {
        if self.status != GameStatus::Playing || self.grid.is_row_full(self.cursor.row) {
            return Transition::Ignored;
        }

        self.grid.set(self.cursor.row, self.cursor.col, letter);
        if self.cursor.col + 1 < self.word_len() {
            self.cursor.col += 1;
        }
        Transition::Edited
    }

    /// Erase the last letter of the active row
    pub fn clear(&mut self) -> Transition {
        if self.status != GameStatus::Playing {
            return Transition::Ignored;
        }

        let Cursor { row, col } = self.cursor;
        if self.is_last_content() {
            self.grid.clear(row, col);
            return Transition::Edited;
        }

        if col == 0 {
            return Transition::Ignored;
        }

        self.cursor.col = col - 1;
        self.grid.clear(row, col - 1);
        Transition::Edited
    }

    /// Submit the active row
    ///
    /// Ignored unless every cell of the row is filled.
    pub fn enter(&mut self) -> Transition {
        if self.status != GameStatus::Playing {
            return Transition::Ignored;
        }

        let Some(candidate) = self.grid.row_word(self.cursor.row) else {
            return Transition::Ignored;
        };

        let tries = self.cursor.row + 1;
        if candidate == self.target.text() {
            self.finish(GameStatus::Won);
            tracing::info!(tries, "word guessed");
            return Transition::Finished(EndOfGameNotice::new(GameOutcome::Won { tries }));
        }

        if tries == self.max_tries {
            self.finish(GameStatus::Lost);
            tracing::info!(answer = self.target.text(), "out of tries");
            return Transition::Finished(EndOfGameNotice::new(GameOutcome::Lost {
                answer: self.target.text().to_string(),
            }));
        }

        self.cursor = Cursor {
            row: tries,
            col: 0,
        };
        self.keyboard = KeyboardHighlight::recompute(&self.grid, tries, &self.target);
        tracing::debug!(guess = %candidate, row = tries, "row committed");
        Transition::RowCommitted
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        // The final row is scored on the grid, so the keyboard includes it too
        self.keyboard =
            KeyboardHighlight::recompute(&self.grid, self.cursor.row + 1, &self.target);
    }

    /// Cursor is on the last column and that cell holds a letter
    fn is_last_content(&self) -> bool {
        self.cursor.col + 1 == self.word_len()
            && self.grid.get(self.cursor.row, self.cursor.col).is_some()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardHighlight {
        &self.keyboard
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn max_tries(&self) -> usize {
        self.max_tries
    }

    #[must_use]
    pub fn word_len(&self) -> usize {
        self.target.len()
    }

    /// True when the active row has no empty cell left
    #[must_use]
    pub fn is_active_row_full(&self) -> bool {
        self.grid.is_row_full(self.cursor.row)
    }

    /// Rows that have been scored
    ///
    /// While playing these are the rows above the cursor; once the game is
    /// over the cursor row has been scored as well.
    #[must_use]
    pub const fn committed_rows(&self) -> usize {
        match self.status {
            GameStatus::Playing => self.cursor.row,
            GameStatus::Won | GameStatus::Lost => self.cursor.row + 1,
        }
    }

    /// Classification of a committed cell, derived on demand
    #[must_use]
    pub fn cell_class(&self, row: usize, col: usize) -> Option<LetterClass> {
        if row >= self.committed_rows() {
            return None;
        }
        let letter = self.grid.get(row, col)?;
        Some(classify_letter(letter, col, &self.target))
    }

    /// The end-of-game notice, if the game has ended
    #[must_use]
    pub fn notice(&self) -> Option<EndOfGameNotice> {
        let outcome = match self.status {
            GameStatus::Playing => return None,
            GameStatus::Won => GameOutcome::Won {
                tries: self.cursor.row + 1,
            },
            GameStatus::Lost => GameOutcome::Lost {
                answer: self.target.text().to_string(),
            },
        };
        Some(EndOfGameNotice::new(outcome))
    }

    /// Read-only view for rendering
    #[must_use]
    pub const fn snapshot(&self) -> Snapshot<'_> {
        Snapshot { game: self }
    }
}

/// Read-only view of a [`GameState`]
///
/// Renderers draw from this and have no way to mutate the game.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    game: &'a GameState,
}

impl Snapshot<'_> {
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        self.game.grid()
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.game.cursor()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.game.status()
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardHighlight {
        self.game.keyboard()
    }

    #[must_use]
    pub fn word_len(&self) -> usize {
        self.game.word_len()
    }

    #[must_use]
    pub const fn max_tries(&self) -> usize {
        self.game.max_tries()
    }

    #[must_use]
    pub fn cell_class(&self, row: usize, col: usize) -> Option<LetterClass> {
        self.game.cell_class(row, col)
    }

    /// The cell that receives the next letter
    #[must_use]
    pub fn is_cell_active(&self, row: usize, col: usize) -> bool {
        self.status() == GameStatus::Playing
            && self.cursor() == (Cursor { row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn game(target: &str) -> GameState {
        GameState::new(Word::new(target).unwrap(), DEFAULT_MAX_TRIES)
    }

    fn type_word(game: &mut GameState, word: &str) {
        for letter in word.chars() {
            game.submit_letter(letter);
        }
    }

    fn guess(game: &mut GameState, word: &str) -> Transition {
        type_word(game, word);
        game.enter()
    }

    #[test]
    fn new_game_starts_playing_at_origin() {
        let game = game("crane");
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.cursor(), Cursor::default());
        assert_eq!(game.grid().row_count(), 6);
        assert_eq!(game.grid().col_count(), 5);
        assert!(game.notice().is_none());
    }

    #[test]
    fn zero_tries_is_raised_to_one() {
        let game = GameState::new(Word::new("crane").unwrap(), 0);
        assert_eq!(game.max_tries(), 1);
    }

    #[test]
    fn submit_letter_advances_until_last_column() {
        let mut game = game("crane");
        type_word(&mut game, "cra");
        assert_eq!(game.cursor(), Cursor { row: 0, col: 3 });

        type_word(&mut game, "ne");
        assert_eq!(game.cursor(), Cursor { row: 0, col: 4 });
        assert!(game.is_active_row_full());
    }

    #[test]
    fn submit_letter_on_full_row_is_ignored() {
        let mut game = game("crane");
        type_word(&mut game, "crate");
        assert_eq!(game.submit_letter('x'), Transition::Ignored);
        assert_eq!(game.grid().row_word(0).as_deref(), Some("crate"));
    }

    #[test]
    fn clear_at_column_zero_is_noop() {
        let mut game = game("crane");
        assert_eq!(game.clear(), Transition::Ignored);
        assert_eq!(game.cursor(), Cursor::default());
    }

    #[test]
    fn clear_moves_back_and_erases() {
        let mut game = game("crane");
        type_word(&mut game, "cr");
        assert_eq!(game.clear(), Transition::Edited);
        assert_eq!(game.cursor(), Cursor { row: 0, col: 1 });
        assert_eq!(game.grid().get(0, 1), None);
        assert_eq!(game.grid().get(0, 0), Some('c'));
    }

    #[test]
    fn clear_on_filled_last_column_keeps_cursor() {
        let mut game = game("crane");
        type_word(&mut game, "crate");
        assert_eq!(game.clear(), Transition::Edited);
        assert_eq!(game.cursor(), Cursor { row: 0, col: 4 });
        assert_eq!(game.grid().get(0, 4), None);

        // Next clear steps back onto column 3
        assert_eq!(game.clear(), Transition::Edited);
        assert_eq!(game.cursor(), Cursor { row: 0, col: 3 });
        assert_eq!(game.grid().get(0, 3), None);
    }

    #[test]
    fn enter_on_partial_row_is_noop() {
        let mut game = game("crane");
        type_word(&mut game, "cra");
        assert_eq!(game.enter(), Transition::Ignored);
        assert_eq!(game.cursor(), Cursor { row: 0, col: 3 });
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn wrong_guess_commits_row_and_updates_keyboard() {
        let mut game = game("crane");
        assert_eq!(guess(&mut game, "crate"), Transition::RowCommitted);
        assert_eq!(game.cursor(), Cursor { row: 1, col: 0 });
        assert_eq!(game.keyboard().get('c'), Some(LetterClass::Exact));
        assert_eq!(game.keyboard().get('t'), Some(LetterClass::Absent));
        assert_eq!(game.cell_class(0, 3), Some(LetterClass::Absent));
        assert_eq!(game.cell_class(1, 0), None);
    }

    #[test]
    fn correct_guess_wins_immediately() {
        let mut game = game("crane");
        guess(&mut game, "slate");
        let transition = guess(&mut game, "crane");

        let expected = EndOfGameNotice::new(GameOutcome::Won { tries: 2 });
        assert_eq!(transition, Transition::Finished(expected.clone()));
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.notice(), Some(expected));
        assert_eq!(game.cell_class(1, 0), Some(LetterClass::Exact));
    }

    #[test]
    fn win_on_last_row() {
        let mut game = game("crane");
        for _ in 0..5 {
            guess(&mut game, "slate");
        }
        let transition = guess(&mut game, "crane");
        assert!(matches!(
            transition,
            Transition::Finished(EndOfGameNotice {
                outcome: GameOutcome::Won { tries: 6 },
                ..
            })
        ));
    }

    #[test]
    fn six_misses_lose_and_block_input() {
        let mut game = game("crane");
        for _ in 0..5 {
            assert_eq!(guess(&mut game, "slate"), Transition::RowCommitted);
        }
        let transition = guess(&mut game, "pound");
        let notice = EndOfGameNotice::new(GameOutcome::Lost {
            answer: "crane".to_string(),
        });
        assert_eq!(transition, Transition::Finished(notice));
        assert_eq!(game.status(), GameStatus::Lost);

        assert_eq!(game.submit_letter('a'), Transition::Ignored);
        assert_eq!(game.clear(), Transition::Ignored);
        assert_eq!(game.enter(), Transition::Ignored);
        // Final row is reflected on the keyboard
        assert_eq!(game.keyboard().get('p'), Some(LetterClass::Absent));
    }

    #[test]
    fn notice_actions_depend_on_outcome() {
        let won = EndOfGameNotice::new(GameOutcome::Won { tries: 3 });
        assert_eq!(won.actions, [NoticeAction::Dismiss, NoticeAction::NewGame]);

        let lost = EndOfGameNotice::new(GameOutcome::Lost {
            answer: "crane".to_string(),
        });
        assert_eq!(lost.actions, [NoticeAction::Dismiss, NoticeAction::Retry]);
        assert!(lost.message().contains("CRANE"));
        assert!(!NoticeAction::Dismiss.starts_new_game());
        assert!(NoticeAction::Retry.starts_new_game());
    }

    #[test]
    fn snapshot_marks_active_cell() {
        let mut game = game("crane");
        type_word(&mut game, "cr");
        let snapshot = game.snapshot();
        assert!(snapshot.is_cell_active(0, 2));
        assert!(!snapshot.is_cell_active(0, 1));
        assert_eq!(snapshot.word_len(), 5);
        assert_eq!(snapshot.max_tries(), 6);
    }

    proptest! {
        #[test]
        fn enter_without_full_row_never_transitions(letters in "[a-z]{0,4}") {
            let mut game = game("crane");
            type_word(&mut game, &letters);
            let before = game.cursor();

            prop_assert_eq!(game.enter(), Transition::Ignored);
            prop_assert_eq!(game.cursor(), before);
            prop_assert_eq!(game.status(), GameStatus::Playing);
        }

        #[test]
        fn exact_target_wins_on_any_row(misses in 0usize..6) {
            let mut game = game("crane");
            for _ in 0..misses {
                guess(&mut game, "pound");
            }
            let transition = guess(&mut game, "crane");
            prop_assert!(matches!(transition, Transition::Finished(_)));
            prop_assert_eq!(game.status(), GameStatus::Won);
        }
    }
}
