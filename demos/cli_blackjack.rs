//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    ActionError, Card, DealerHand, Hand, RoundResult, RoundState, Session, Suit, TableOptions, Turn,
};

fn main() {
    env_logger::init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let name = prompt_raw("Your name: ");
    let bots = prompt_line("Play with bots? (y/n): ");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut options = TableOptions::default();
    if !name.is_empty() {
        options = options.with_player_name(name);
    }
    if matches!(bots.as_str(), "y" | "yes") {
        options = options.with_bots(2);
    }
    let mut session = Session::new(options, seed);

    loop {
        if let Err(err) = session.start_round() {
            println!("Deal error: {err}");
            break;
        }

        let result = loop {
            print_table(&session);

            let action = prompt_line("[h]it [s]tand [q]uit: ");
            let step = match action.as_str() {
                "h" | "hit" => session.hit().map(|turn| match turn {
                    Turn::Continue(card) => {
                        println!("You draw {}.", format_card(&card));
                        None
                    }
                    Turn::Finished(result) => Some(result),
                }),
                "s" | "stand" | "stay" => session.stand().map(Some),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match step {
                Ok(Some(result)) => break Some(result),
                Ok(None) => {}
                Err(ActionError::DeckExhausted) => {
                    println!("The deck ran out. Shuffling a fresh deck.");
                    if let Some(round) = session.round_mut() {
                        round.rebuild_deck();
                    }
                    let dealer_turn = session
                        .round()
                        .is_some_and(|round| round.state() == RoundState::DealerTurn);
                    if dealer_turn {
                        match session.settle() {
                            Ok(result) => break Some(result),
                            Err(err) => {
                                println!("Round abandoned: {err}");
                                break None;
                            }
                        }
                    }
                }
                Err(err) => {
                    println!("Action error: {err}");
                    break None;
                }
            }
        };

        if let Some(result) = result {
            print_final(&session, &result);
        }

        let stats = session.statistics();
        println!(
            "Played {} | won {} | lost {}",
            stats.games_played(),
            stats.games_won(),
            stats.games_lost()
        );

        match prompt_line("Play again? (y/n/r to reset stats): ").as_str() {
            "r" | "reset" => session.reset_statistics(),
            "n" | "no" | "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            _ => {}
        }
    }
}

fn prompt_raw(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_line(prompt: &str) -> String {
    prompt_raw(prompt).to_lowercase()
}

fn print_table(session: &Session) {
    let Some(round) = session.round() else {
        return;
    };
    println!("\nDeck: {} cards remaining", round.cards_remaining());

    let dealer = round.dealer_hand();
    println!(
        "\nDealer: {} (value {})",
        format_dealer(dealer),
        dealer.visible_total()
    );
    for seat in round.seats() {
        if let Some(hand) = round.hand(seat) {
            println!("{seat}: {} | value {}", format_hand(hand), hand.total());
        }
    }
    println!();
}

fn print_final(session: &Session, result: &RoundResult) {
    if let Some(round) = session.round() {
        println!(
            "\nDealer: {} (value {})",
            format_dealer(round.dealer_hand()),
            result.dealer_total
        );
        for seat in round.seats() {
            if let Some(hand) = round.hand(seat) {
                println!("{seat}: {} | value {}", format_hand(hand), hand.total());
            }
        }
    }
    println!("\nResult: {result}\n");
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    let mut parts = Vec::new();
    if dealer.is_hidden() {
        parts.push("??".to_string());
    }
    parts.extend(dealer.visible_cards().iter().map(format_card));
    parts.join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
