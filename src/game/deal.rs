use alloc::vec::Vec;

use crate::error::DealError;

use super::{Round, RoundState, Seat};

impl Round {
    fn deal_one_card_to_seats(&mut self, seats: &[Seat]) -> Result<(), DealError> {
        for &seat in seats {
            let card = self.draw()?;
            if let Some(hand) = self.hand_mut(seat) {
                hand.add_card(card);
            }
        }
        Ok(())
    }

    /// Deals two cards to the dealer, then two to every seat.
    ///
    /// The dealer's first card is dealt face down. Seats then receive one
    /// card each per pass, over two passes.
    ///
    /// Hands are emptied first, so after [`DealError::DeckExhausted`] the
    /// deck can be replaced and `deal` called again.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already been dealt or the deck runs
    /// out of cards.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::Dealing {
            return Err(DealError::InvalidState);
        }

        self.dealer.clear();
        for (_, hand) in &mut self.hands {
            hand.clear();
        }

        let hidden = self.draw()?;
        self.dealer.add_card(hidden);
        let up = self.draw()?;
        self.dealer.add_card(up);

        let seats: Vec<Seat> = self.seats().collect();
        self.deal_one_card_to_seats(&seats)?;
        self.deal_one_card_to_seats(&seats)?;

        log::debug!(
            "dealt {} seat(s), dealer shows {up}, {} cards remaining",
            seats.len(),
            self.cards_remaining()
        );

        self.state = RoundState::PlayerTurn;
        Ok(())
    }
}
