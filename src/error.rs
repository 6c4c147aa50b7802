//! Error types for round operations.

use thiserror::Error;

/// The deck has no more cards to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct DeckExhausted;

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The round has already been dealt.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

impl From<DeckExhausted> for DealError {
    fn from(_: DeckExhausted) -> Self {
        Self::DeckExhausted
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// No round has been started.
    #[error("no round in progress")]
    NoRound,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

impl From<DeckExhausted> for ActionError {
    fn from(_: DeckExhausted) -> Self {
        Self::DeckExhausted
    }
}

impl From<ShowdownError> for ActionError {
    fn from(err: ShowdownError) -> Self {
        match err {
            ShowdownError::InvalidState => Self::InvalidState,
            ShowdownError::DeckExhausted => Self::DeckExhausted,
        }
    }
}

/// Errors that can occur during dealer play and resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid round state for this step.
    #[error("invalid round state for showdown")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

impl From<DeckExhausted> for ShowdownError {
    fn from(_: DeckExhausted) -> Self {
        Self::DeckExhausted
    }
}
