//! The shuffled stack cards are drawn from.

extern crate alloc;

use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckExhausted;

/// A stack of cards built from one or more standard packs.
///
/// The top of the deck is the end of the underlying vector, so drawing is a
/// `pop`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a shuffled deck of `packs` standard packs.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(packs: u8, rng: &mut R) -> Self {
        let mut deck = Self::build(packs);
        deck.shuffle(rng);
        deck
    }

    /// Builds an unshuffled deck of `packs` standard packs, in pack, suit and
    /// rank order.
    #[must_use]
    pub fn build(packs: u8) -> Self {
        let mut cards = Vec::with_capacity(packs as usize * DECK_SIZE);

        for _ in 0..packs {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        Self { cards }
    }

    /// Builds a stacked deck that deals `draws` in the given order.
    ///
    /// ```
    /// use bjtable::{Card, Deck, Rank, Suit};
    ///
    /// let ace = Card::new(Suit::Spades, Rank::Ace);
    /// let two = Card::new(Suit::Hearts, Rank::Two);
    /// let mut deck = Deck::from_draw_order(&[ace, two]);
    /// assert_eq!(deck.draw(), Ok(ace));
    /// assert_eq!(deck.draw(), Ok(two));
    /// assert!(deck.draw().is_err());
    /// ```
    #[must_use]
    pub fn from_draw_order(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the remaining cards into a uniformly random order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckExhausted`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, DeckExhausted> {
        self.cards.pop().ok_or(DeckExhausted)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
