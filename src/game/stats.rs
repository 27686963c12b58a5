//! Session statistics
//!
//! Kept in memory for the lifetime of the process only.

use super::state::GameOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// `guess_distribution[n - 1]` counts wins in `n` tries
    pub guess_distribution: Vec<usize>,
    pub current_streak: usize,
    pub max_streak: usize,
}

impl Statistics {
    #[must_use]
    pub fn new(max_tries: usize) -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            guess_distribution: vec![0; max_tries],
            current_streak: 0,
            max_streak: 0,
        }
    }

    pub fn record(&mut self, outcome: &GameOutcome) {
        self.games_played += 1;
        match outcome {
            GameOutcome::Won { tries } => {
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if let Some(slot) = tries
                    .checked_sub(1)
                    .and_then(|i| self.guess_distribution.get_mut(i))
                {
                    *slot += 1;
                }
            }
            GameOutcome::Lost { .. } => self.current_streak = 0,
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
