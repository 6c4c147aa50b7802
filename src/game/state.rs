//! Round state types.

use core::fmt;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Deck built, initial cards not yet dealt.
    Dealing,
    /// Waiting for the human to hit or stand.
    PlayerTurn,
    /// Bots and dealer draw to 17.
    DealerTurn,
    /// All hands are final and can be resolved.
    Resolved,
}

/// A non-dealer seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Seat {
    /// The human player.
    Player,
    /// First scripted bot.
    Bot1,
    /// Second scripted bot.
    Bot2,
}

impl Seat {
    /// Seats in dealing order.
    pub const ALL: [Self; 3] = [Self::Player, Self::Bot1, Self::Bot2];

    /// Returns whether the seat is played by a bot.
    #[must_use]
    pub const fn is_bot(self) -> bool {
        !matches!(self, Self::Player)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("Player"),
            Self::Bot1 => f.write_str("Bot 1"),
            Self::Bot2 => f.write_str("Bot 2"),
        }
    }
}
