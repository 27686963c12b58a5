//! Game rules and turn handling
//!
//! `GameState` is the state machine, `InputController` feeds it keys and
//! `Statistics` tallies finished games.

mod input;
mod state;
mod stats;

pub use input::{CLEAR_KEY, ENTER_KEY, InputController, Key};
pub use state::{
    DEFAULT_MAX_TRIES, EndOfGameNotice, GameOutcome, GameState, GameStatus, NoticeAction,
    Snapshot, Transition,
};
pub use stats::Statistics;

/// Settings shared by every game of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_tries: usize,
    /// Seed for reproducible word picks
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_tries: usize, seed: Option<u64>) -> Self {
        Self { max_tries, seed }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TRIES, None)
    }
}
