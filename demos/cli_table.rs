//! CLI table example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use solojack::{Card, DealtCard, Outcome, Phase, Round, RoundSnapshot, Suit, TableOptions};

fn main() {
    println!("Blackjack table example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default();
    let mut round = Round::new(options, seed);

    loop {
        match round.phase() {
            Phase::Betting => {
                let balance = round.balance();
                println!("\nBalance: {balance}");

                let Some(bet) = prompt_usize(&format!(
                    "Bet amount ({}-{balance}, 0 to quit): ",
                    round.options().min_bet
                )) else {
                    break;
                };

                if bet == 0 {
                    println!("Goodbye.");
                    break;
                }

                if let Err(err) = round.place_bet(bet) {
                    println!("Bet error: {err}");
                    continue;
                }

                if let Err(err) = round.deal() {
                    println!("Deal error: {err}");
                }
            }
            Phase::PlayerTurn => {
                print_table(&round.snapshot());

                match prompt_line("Action ([h]it / [s]tand / [q]uit): ").as_str() {
                    "h" | "hit" => {
                        if let Err(err) = round.hit() {
                            println!("Action error: {err}");
                        }
                    }
                    "s" | "stand" => {
                        if let Err(err) = round.stand() {
                            println!("Action error: {err}");
                        }
                    }
                    "q" | "quit" => return,
                    _ => println!("Unknown action."),
                }
            }
            Phase::RoundOver => {
                let snapshot = round.snapshot();
                print_table(&snapshot);
                if let Some(outcome) = snapshot.outcome {
                    println!("{}", outcome_message(outcome));
                }

                if round.next_round().is_err() {
                    println!("Out of money.");
                    match prompt_line("Start over? (y/n): ").as_str() {
                        "y" | "yes" => round.reset(),
                        _ => break,
                    }
                }
            }
            // Dealing and the dealer's turn resolve synchronously inside
            // deal/hit/stand, so the loop never observes them.
            Phase::Dealing | Phase::DealerTurn => {
                if let Err(err) = round.deal() {
                    println!("Deal error: {err}");
                }
            }
        }
    }
}

fn outcome_message(outcome: Outcome) -> String {
    match outcome {
        Outcome::PlayerWin => "You win!".to_string(),
        Outcome::DealerWin => "Dealer wins.".to_string(),
        Outcome::Push => "Push. Bet returned.".to_string(),
        Outcome::PlayerBlackjack => "Blackjack! Pays 3:2.".to_string(),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(snapshot: &RoundSnapshot) {
    let dealer_view = format_dealer(&snapshot.dealer_cards);
    let dealer_score = if snapshot.dealer_cards.iter().any(|dealt| dealt.concealed) {
        format!("{} + ?", snapshot.dealer_score)
    } else {
        snapshot.dealer_score.to_string()
    };
    println!("\nDealer: {dealer_view} ({dealer_score})");

    let player_view = snapshot
        .player_cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "You:    {player_view} ({}) | bet {}",
        snapshot.player_score, snapshot.bet
    );
}

fn format_dealer(cards: &[DealtCard]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }

    cards
        .iter()
        .map(|dealt| {
            if dealt.concealed {
                "??".to_string()
            } else {
                format_card(&dealt.card)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };

    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
