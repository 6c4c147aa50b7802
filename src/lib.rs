//! A single-table blackjack round engine with optional `no_std` support.
//!
//! A [`Round`] owns the deck, the dealer's hand and the hands of the human
//! and up to two scripted bots. It deals, accepts hit/stand from the human,
//! plays the bots and dealer by the draw-to-17 house rule, and resolves every
//! seat against the dealer. A [`Session`] keeps win/loss [`Statistics`]
//! across rounds and drives the round for you.
//!
//! # Example
//!
//! ```
//! use bjtable::{Session, TableOptions, Turn};
//!
//! let mut session = Session::new(TableOptions::default().with_bots(2), 42);
//! session.start_round().unwrap();
//!
//! let result = loop {
//!     let total = session.round().unwrap().player_hand().total();
//!     if total >= 17 {
//!         break session.stand().unwrap();
//!     }
//!     if let Turn::Finished(result) = session.hit().unwrap() {
//!         break result;
//!     }
//! };
//! assert_eq!(result.participants.len(), 3);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod session;
pub mod stats;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, DeckExhausted, ShowdownError};
pub use game::{DEALER_STANDS_AT, HitOutcome, Round, RoundState, Seat};
pub use hand::{BLACKJACK, DealerHand, Hand};
pub use options::{MAX_BOTS, TableOptions};
pub use result::{Outcome, ParticipantResult, RoundResult, outcome};
pub use session::{Session, Turn};
pub use stats::Statistics;
