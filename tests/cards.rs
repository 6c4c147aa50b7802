//! Card, deck and hand tests.

use std::collections::HashMap;

use bjtable::{Card, DECK_SIZE, DealerHand, Deck, DeckExhausted, Hand, Outcome, Rank, Suit, outcome};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn hand_of(ranks: &[Rank]) -> Hand {
    ranks.iter().map(|&rank| card(Suit::Spades, rank)).collect()
}

fn counts(cards: &[Card]) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for &card in cards {
        *counts.entry(card).or_insert(0) += 1;
    }
    counts
}

#[test]
fn card_values_and_symbols() {
    assert_eq!(card(Suit::Hearts, Rank::Two).value(), 2);
    assert_eq!(card(Suit::Hearts, Rank::Ten).value(), 10);
    assert_eq!(card(Suit::Clubs, Rank::Jack).value(), 10);
    assert_eq!(card(Suit::Clubs, Rank::Queen).value(), 10);
    assert_eq!(card(Suit::Clubs, Rank::King).value(), 10);
    assert_eq!(card(Suit::Spades, Rank::Ace).value(), 11);

    assert!(card(Suit::Spades, Rank::Ace).is_ace());
    assert!(!card(Suit::Spades, Rank::King).is_ace());

    assert_eq!(card(Suit::Hearts, Rank::Ten).to_string(), "10-H");
    assert_eq!(card(Suit::Spades, Rank::Ace).image_key(), "A-S");
    assert_eq!(card(Suit::Diamonds, Rank::Queen).to_string(), "Q-D");
}

#[test]
fn deck_has_every_rank_and_suit_per_pack() {
    for packs in 1..=4u8 {
        let mut rng = ChaCha8Rng::seed_from_u64(u64::from(packs));
        let deck = Deck::new(packs, &mut rng);
        let n = packs as usize;

        assert_eq!(deck.len(), DECK_SIZE * n);
        for rank in Rank::ALL {
            let count = deck.cards().iter().filter(|c| c.rank() == rank).count();
            assert_eq!(count, 4 * n, "rank {rank:?} with {packs} pack(s)");
        }
        for suit in Suit::ALL {
            let count = deck.cards().iter().filter(|c| c.suit() == suit).count();
            assert_eq!(count, 13 * n, "suit {suit:?} with {packs} pack(s)");
        }
    }
}

#[test]
fn shuffle_is_a_permutation_of_the_built_deck() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let built = Deck::build(2);
    let shuffled = Deck::new(2, &mut rng);

    assert_eq!(counts(built.cards()), counts(shuffled.cards()));
    assert_ne!(built.cards(), shuffled.cards());
}

#[test]
fn drawing_exhausts_the_deck() {
    for packs in 1..=4u8 {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut deck = Deck::new(packs, &mut rng);

        for _ in 0..DECK_SIZE * packs as usize {
            assert!(deck.draw().is_ok());
        }
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), Err(DeckExhausted));
        assert_eq!(deck.draw(), Err(DeckExhausted));
    }
}

#[test]
fn empty_deck_from_zero_packs() {
    let mut deck = Deck::build(0);
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(DeckExhausted));
}

#[test]
fn stacked_deck_draws_in_order() {
    let draws = [
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Diamonds, Rank::Ace),
    ];
    let mut deck = Deck::from_draw_order(&draws);

    assert_eq!(deck.len(), 3);
    for expected in draws {
        assert_eq!(deck.draw(), Ok(expected));
    }
    assert!(deck.is_empty());
}

#[test]
fn ace_softening() {
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace]).total(), 12);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Nine]).total(), 20);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]).total(), 21);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Nine, Rank::Two]).total(), 12);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]).total(), 14);
    assert_eq!(hand_of(&[Rank::King, Rank::Queen, Rank::Ace]).total(), 21);
}

#[test]
fn soft_and_bust_flags() {
    let soft = hand_of(&[Rank::Ace, Rank::Six]);
    assert_eq!(soft.total(), 17);
    assert!(soft.is_soft());
    assert_eq!(soft.ace_count(), 1);

    let hard = hand_of(&[Rank::Ace, Rank::Six, Rank::King]);
    assert_eq!(hard.total(), 17);
    assert!(!hard.is_soft());
    assert!(!hard.is_bust());

    let bust = hand_of(&[Rank::Ten, Rank::Nine, Rank::Five]);
    assert_eq!(bust.total(), 24);
    assert!(bust.is_bust());
    assert_eq!(bust.ace_count(), 0);

    assert_eq!(Hand::new().total(), 0);
    assert!(Hand::new().is_empty());
}

#[test]
fn total_is_recomputed_after_each_card() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, Rank::Ace));
    assert_eq!(hand.total(), 11);
    hand.add_card(card(Suit::Hearts, Rank::Five));
    assert_eq!(hand.total(), 16);
    hand.add_card(card(Suit::Hearts, Rank::Nine));
    assert_eq!(hand.total(), 15);
    hand.add_card(card(Suit::Hearts, Rank::Ace));
    assert_eq!(hand.total(), 16);
    assert_eq!(hand.len(), 4);
}

#[test]
fn total_ignores_card_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let cases: [&[Rank]; 4] = [
        &[Rank::Ace, Rank::Ace, Rank::Nine],
        &[Rank::Ace, Rank::Nine, Rank::Two],
        &[Rank::Ace, Rank::King, Rank::Ace, Rank::Five, Rank::Ace],
        &[Rank::Three, Rank::Seven, Rank::Ace, Rank::Jack],
    ];

    for ranks in cases {
        let expected = hand_of(ranks).total();
        let mut shuffled = ranks.to_vec();
        for _ in 0..50 {
            shuffled.shuffle(&mut rng);
            assert_eq!(hand_of(&shuffled).total(), expected, "{shuffled:?}");
        }
    }
}

#[test]
fn dealer_hidden_card_counts_toward_total() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Suit::Hearts, Rank::King));
    dealer.add_card(card(Suit::Clubs, Rank::Six));

    assert!(dealer.is_hidden());
    assert_eq!(dealer.hidden_card(), Some(&card(Suit::Hearts, Rank::King)));
    assert_eq!(dealer.visible_cards(), &[card(Suit::Clubs, Rank::Six)]);
    assert_eq!(dealer.visible_total(), 6);
    assert_eq!(dealer.total(), 16);

    dealer.reveal_hidden();
    assert!(!dealer.is_hidden());
    assert_eq!(dealer.visible_cards().len(), 2);
    assert_eq!(dealer.visible_total(), 16);
    assert_eq!(dealer.total(), 16);
}

#[test]
fn outcome_rules() {
    assert_eq!(outcome(20, 19), Outcome::Win);
    assert_eq!(outcome(22, 19), Outcome::Loss);
    assert_eq!(outcome(19, 19), Outcome::Tie);
    assert_eq!(outcome(18, 23), Outcome::Win);
    assert_eq!(outcome(17, 20), Outcome::Loss);
    assert_eq!(outcome(21, 21), Outcome::Tie);
    assert_eq!(outcome(23, 23), Outcome::Loss);
    assert_eq!(outcome(22, 25), Outcome::Loss);
}
