//! Round result types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::game::Seat;
use crate::hand::BLACKJACK;

/// Result of a single hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Participant wins (dealer busts or participant has higher value).
    Win,
    /// Same total as the dealer, neither bust.
    Tie,
    /// Participant loses (participant busts or dealer has higher value).
    Loss,
}

/// Compares a participant's total with the dealer's.
///
/// ```
/// use bjtable::{Outcome, outcome};
///
/// assert_eq!(outcome(20, 19), Outcome::Win);
/// assert_eq!(outcome(22, 19), Outcome::Loss);
/// assert_eq!(outcome(19, 19), Outcome::Tie);
/// assert_eq!(outcome(18, 23), Outcome::Win);
/// ```
#[must_use]
pub const fn outcome(participant: u8, dealer: u8) -> Outcome {
    if participant <= BLACKJACK && (participant > dealer || dealer > BLACKJACK) {
        Outcome::Win
    } else if participant == dealer && participant <= BLACKJACK {
        Outcome::Tie
    } else {
        Outcome::Loss
    }
}

/// Result for one seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantResult {
    /// The seat.
    pub seat: Seat,
    /// The outcome against the dealer.
    pub outcome: Outcome,
    /// The participant's final total.
    pub total: u8,
    /// Human-readable result line.
    pub message: String,
}

impl fmt::Display for ParticipantResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each seat, in dealing order. The human is first.
    pub participants: Vec<ParticipantResult>,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Dealer-centric summary, present when bots are seated.
    pub summary: Option<String>,
}

impl RoundResult {
    /// Returns the human player's result.
    #[must_use]
    pub fn player(&self) -> Option<&ParticipantResult> {
        self.participants.iter().find(|p| p.seat == Seat::Player)
    }

    /// Returns the result for the given seat.
    #[must_use]
    pub fn seat(&self, seat: Seat) -> Option<&ParticipantResult> {
        self.participants.iter().find(|p| p.seat == seat)
    }

    /// Returns every result line joined into one message.
    #[must_use]
    pub fn message(&self) -> String {
        let mut lines: Vec<&str> = self.participants.iter().map(|p| p.message.as_str()).collect();
        if let Some(summary) = &self.summary {
            lines.push(summary);
        }
        lines.join(" ")
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
