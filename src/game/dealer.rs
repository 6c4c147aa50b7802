use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::{Outcome, ParticipantResult, RoundResult, outcome};

use super::{DEALER_STANDS_AT, Round, RoundState, Seat};

impl Round {
    /// Bots and dealer play their hands by the house rule.
    ///
    /// Each bot, in seat order, then the dealer draws while its total is
    /// below 17. No card is drawn for a hand already at 17 or more.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state or the deck
    /// is empty while a hand must draw. After [`ShowdownError::DeckExhausted`]
    /// the round stays in dealer turn state; replace the deck and call again
    /// to finish the draws.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != RoundState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        for index in 0..self.hands.len() {
            let seat = self.hands[index].0;
            if !seat.is_bot() {
                continue;
            }
            while self.hands[index].1.total() < DEALER_STANDS_AT {
                let card = self.draw()?;
                log::debug!("{seat} draws {card}");
                self.hands[index].1.add_card(card);
            }
        }

        let mut drawn_cards = Vec::new();
        while self.dealer.total() < DEALER_STANDS_AT {
            let card = self.draw()?;
            log::debug!("dealer draws {card}");
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        self.state = RoundState::Resolved;

        Ok(drawn_cards)
    }

    /// Compares every seat with the dealer.
    ///
    /// This is a pure query; statistics are kept by [`crate::Session`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not resolved.
    pub fn resolve(&self) -> Result<RoundResult, ShowdownError> {
        if self.state != RoundState::Resolved {
            return Err(ShowdownError::InvalidState);
        }

        let dealer_total = self.dealer.total();
        let dealer_bust = self.dealer.is_bust();

        let participants: Vec<ParticipantResult> = self
            .hands
            .iter()
            .map(|(seat, hand)| {
                let total = hand.total();
                let outcome = outcome(total, dealer_total);
                ParticipantResult {
                    seat: *seat,
                    outcome,
                    total,
                    message: self.result_line(*seat, outcome),
                }
            })
            .collect();

        let summary = (participants.len() > 1).then(|| {
            let beaten = participants
                .iter()
                .filter(|p| p.outcome == Outcome::Loss)
                .count();
            let verb = if dealer_bust { "busts with" } else { "stands on" };
            format!(
                "Dealer {verb} {dealer_total} and beats {beaten} of {} hands.",
                participants.len()
            )
        });

        let result = RoundResult {
            participants,
            dealer_total,
            dealer_bust,
            summary,
        };
        log::info!("round resolved: {result}");

        Ok(result)
    }

    fn result_line(&self, seat: Seat, outcome: Outcome) -> String {
        match (seat, outcome) {
            (Seat::Player, Outcome::Win) => format!("{} you win!", self.options.player_name),
            (Seat::Player, Outcome::Tie) => {
                format!("{} tied with the dealer.", self.options.player_name)
            }
            (Seat::Player, Outcome::Loss) => format!("{} you lost!", self.options.player_name),
            (bot, Outcome::Win) => format!("{bot} wins."),
            (bot, Outcome::Tie) => format!("{bot} ties with the dealer."),
            (bot, Outcome::Loss) => format!("{bot} loses."),
        }
    }
}
