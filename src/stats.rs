//! Win/loss counters kept across rounds.

use crate::result::Outcome;

/// Games played, won and lost during one session.
///
/// A tie is tallied as a loss; only a win increments `games_won`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    games_played: u32,
    games_won: u32,
    games_lost: u32,
}

impl Statistics {
    /// Creates zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            games_lost: 0,
        }
    }

    /// Number of rounds whose human turn has ended.
    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Number of rounds the human won.
    #[must_use]
    pub const fn games_won(&self) -> u32 {
        self.games_won
    }

    /// Number of rounds the human lost or tied.
    #[must_use]
    pub const fn games_lost(&self) -> u32 {
        self.games_lost
    }

    /// Counts one played game.
    pub const fn record_played(&mut self) {
        self.games_played = self.games_played.saturating_add(1);
    }

    /// Counts the human's outcome for one round.
    pub const fn record_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.games_won = self.games_won.saturating_add(1),
            Outcome::Tie | Outcome::Loss => self.games_lost = self.games_lost.saturating_add(1),
        }
    }

    /// Zeroes all counters.
    pub const fn reset(&mut self) {
        *self = Self::new();
    }
}
