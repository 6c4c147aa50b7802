//! Participant and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Hands above this total are bust.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0;
    (value, is_soft)
}

/// A participant's hand.
///
/// The total is recomputed from the cards on every query, so an Ace that
/// counted 11 may count 1 after the next card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Removes all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the number of Aces held.
    #[must_use]
    pub fn ace_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_ace()).count()
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// The dealer's hand.
///
/// The first card dealt is face down until the human's turn ends. Hiding it
/// only affects [`DealerHand::visible_cards`] and
/// [`DealerHand::visible_total`]; [`DealerHand::total`] always counts it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    hand: Hand,
    hidden_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hidden_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Returns the face-down card (first card dealt).
    #[must_use]
    pub fn hidden_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns whether the first card is still face down.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        !self.hidden_revealed
    }

    /// Turns the hidden card face up.
    pub const fn reveal_hidden(&mut self) {
        self.hidden_revealed = true;
    }

    /// Returns the cards a spectator can see.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        let cards = self.hand.cards();
        if self.hidden_revealed || cards.is_empty() {
            cards
        } else {
            &cards[1..]
        }
    }

    /// Calculates the value of the visible cards only.
    #[must_use]
    pub fn visible_total(&self) -> u8 {
        evaluate_cards(self.visible_cards()).0
    }

    /// Calculates the full value of the hand, hidden card included.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.hand.total()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Clears the hand and turns the hidden card face down again.
    pub fn clear(&mut self) {
        self.hand.clear();
        self.hidden_revealed = false;
    }

    /// Returns the dealer's cards as a plain hand.
    #[must_use]
    pub const fn as_hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }
}
