//! A player's session: configuration, statistics and the active round.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, DealError};
use crate::game::{Round, RoundState};
use crate::options::TableOptions;
use crate::result::RoundResult;
use crate::stats::Statistics;

/// What happened after a hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// The human may act again.
    Continue(Card),
    /// The human's turn ended and the round was resolved.
    Finished(RoundResult),
}

/// Owns the statistics and at most one active round.
///
/// Pass the session by reference to whatever drives the table. Starting a
/// new round discards the previous one.
///
/// # Example
///
/// ```
/// use bjtable::{Session, TableOptions};
///
/// let mut session = Session::new(TableOptions::default(), 7);
/// session.start_round().unwrap();
/// let result = session.stand().unwrap();
/// assert_eq!(session.statistics().games_played(), 1);
/// println!("{result}");
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    options: TableOptions,
    statistics: Statistics,
    rng: ChaCha8Rng,
    round: Option<Round>,
    /// Whether the active round has been counted in `games_played`.
    played_recorded: bool,
}

impl Session {
    /// Creates a session. Each round's deck is seeded from `seed`.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self {
            options,
            statistics: Statistics::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            round: None,
            played_recorded: false,
        }
    }

    /// Starts a new round with a fresh deck and deals the initial cards.
    ///
    /// The previous round is discarded even if dealing fails.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DeckExhausted`] if the configured deck is too
    /// small to deal.
    pub fn start_round(&mut self) -> Result<&Round, DealError> {
        let round = Round::new(self.options.clone(), self.rng.next_u64());
        self.deal_new_round(round)
    }

    /// Starts a new round dealt from the given deck instead of a shuffled one.
    ///
    /// The previous round is discarded even if dealing fails.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DeckExhausted`] if the deck is too small to deal.
    pub fn start_round_with_deck(&mut self, deck: Deck) -> Result<&Round, DealError> {
        let mut round = Round::new(self.options.clone(), self.rng.next_u64());
        round.set_deck(deck);
        self.deal_new_round(round)
    }

    fn deal_new_round(&mut self, mut round: Round) -> Result<&Round, DealError> {
        self.round = None;
        self.played_recorded = false;
        round.deal()?;
        Ok(self.round.insert(round))
    }

    fn record_played_once(&mut self) {
        if !self.played_recorded {
            self.statistics.record_played();
            self.played_recorded = true;
        }
    }

    /// Player action: Hit.
    ///
    /// When the draw ends the human's turn the round is settled and its
    /// result returned.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is active, the round is not in player
    /// turn state, or the deck runs out.
    pub fn hit(&mut self) -> Result<Turn, ActionError> {
        let hit = self.round.as_mut().ok_or(ActionError::NoRound)?.hit()?;
        if !hit.turn_over {
            return Ok(Turn::Continue(hit.card));
        }

        self.settle().map(Turn::Finished)
    }

    /// Player action: Stand. Settles the round and returns its result.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is active, the round is not in player
    /// turn state, or the deck runs out during the dealer's draws.
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        self.round.as_mut().ok_or(ActionError::NoRound)?.stand()?;
        self.settle()
    }

    /// Plays out the bots and dealer, resolves the round and records the
    /// human's outcome.
    ///
    /// [`Session::hit`] and [`Session::stand`] call this when the turn ends.
    /// Call it directly to finish a round whose dealer draws failed with
    /// [`ActionError::DeckExhausted`] after replacing the deck, or a round
    /// whose turn was ended through [`Session::round_mut`]. The round counts
    /// as played exactly once either way.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is active, the round is not in dealer
    /// turn state, or the deck runs out.
    pub fn settle(&mut self) -> Result<RoundResult, ActionError> {
        let state = self.round.as_ref().ok_or(ActionError::NoRound)?.state();
        if state != RoundState::DealerTurn {
            return Err(ActionError::InvalidState);
        }
        self.record_played_once();

        let round = self.round.as_mut().ok_or(ActionError::NoRound)?;
        round.dealer_play()?;
        let result = round.resolve()?;
        if let Some(player) = result.player() {
            self.statistics.record_outcome(player.outcome);
        }

        Ok(result)
    }

    /// Returns the active round.
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Returns the active round mutably, e.g. to replace its deck.
    pub const fn round_mut(&mut self) -> Option<&mut Round> {
        self.round.as_mut()
    }

    /// Returns the session statistics.
    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Zeroes the statistics, e.g. when a different user logs in.
    pub const fn reset_statistics(&mut self) {
        self.statistics.reset();
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }
}
