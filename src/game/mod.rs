//! Round engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckExhausted;
use crate::hand::{DealerHand, Hand};
use crate::options::TableOptions;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use actions::HitOutcome;
pub use state::{RoundState, Seat};

/// Dealer and bots stop drawing once their total reaches this value.
pub const DEALER_STANDS_AT: u8 = 17;

/// One round of blackjack at a single table.
///
/// The round owns its deck, the dealer's hand and one hand per seat. It is
/// driven by a single caller through [`Round::deal`], [`Round::hit`] /
/// [`Round::stand`], [`Round::dealer_play`] and [`Round::resolve`], and does
/// no locking of its own.
#[derive(Debug, Clone)]
pub struct Round {
    options: TableOptions,
    deck: Deck,
    state: RoundState,
    dealer: DealerHand,
    /// Hands in dealing order. The human is always first.
    hands: Vec<(Seat, Hand)>,
    rng: ChaCha8Rng,
}

impl Round {
    /// Creates a round with a freshly shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Round, RoundState, TableOptions};
    ///
    /// let round = Round::new(TableOptions::default(), 42);
    /// assert_eq!(round.state(), RoundState::Dealing);
    /// assert_eq!(round.cards_remaining(), 4 * 52);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(options.packs, &mut rng);
        let hands = Seat::ALL
            .into_iter()
            .take(1 + options.bots as usize)
            .map(|seat| (seat, Hand::new()))
            .collect();

        Self {
            options,
            deck,
            state: RoundState::Dealing,
            dealer: DealerHand::new(),
            hands,
            rng,
        }
    }

    /// Replaces the deck, e.g. to recover from exhaustion or to stack cards.
    pub fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Replaces the deck with a new shuffled one built from the configured
    /// number of packs.
    pub fn rebuild_deck(&mut self) {
        self.deck = Deck::new(self.options.packs, &mut self.rng);
        log::debug!("rebuilt deck with {} cards", self.deck.len());
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Result<Card, DeckExhausted> {
        self.deck.draw().inspect_err(|_| log::warn!("deck exhausted"))
    }

    fn hand_mut(&mut self, seat: Seat) -> Option<&mut Hand> {
        self.hands
            .iter_mut()
            .find(|(s, _)| *s == seat)
            .map(|(_, hand)| hand)
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the table options the round was created with.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the occupied seats in dealing order.
    pub fn seats(&self) -> impl Iterator<Item = Seat> + '_ {
        self.hands.iter().map(|(seat, _)| *seat)
    }

    /// Returns the hand at the given seat, if occupied.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> Option<&Hand> {
        self.hands
            .iter()
            .find(|(s, _)| *s == seat)
            .map(|(_, hand)| hand)
    }

    /// Returns the human player's hand.
    #[must_use]
    pub fn player_hand(&self) -> &Hand {
        &self.hands[0].1
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
