use crate::card::Card;
use crate::error::ActionError;
use crate::hand::BLACKJACK;

use super::{Round, RoundState};

/// What a hit drew and whether it ended the human's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitOutcome {
    /// The card drawn.
    pub card: Card,
    /// The player's total after the draw.
    pub total: u8,
    /// Whether the turn ended because the total reached 21 or more.
    pub turn_over: bool,
}

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    fn end_player_turn(&mut self) {
        self.dealer.reveal_hidden();
        self.state = RoundState::DealerTurn;
    }

    /// Player action: Hit (draw a card).
    ///
    /// Reaching exactly 21 ends the turn just like busting does.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state or the deck
    /// is empty. The state is unchanged on error.
    pub fn hit(&mut self) -> Result<HitOutcome, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        let hand = &mut self.hands[0].1;
        hand.add_card(card);
        let total = hand.total();

        let turn_over = total >= BLACKJACK;
        log::debug!("player hits {card}, total {total}");
        if turn_over {
            self.end_player_turn();
        }

        Ok(HitOutcome {
            card,
            total,
            turn_over,
        })
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        log::debug!("player stands on {}", self.player_hand().total());
        self.end_player_turn();
        Ok(())
    }
}
