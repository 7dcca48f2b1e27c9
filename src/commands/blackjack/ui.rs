//! Handles all rendering and UI logic for the Blackjack game.

use super::state::{Outcome, Round};
use crate::commands::games::card::Card;
use crate::interactions::ids::{BJ_HIT, BJ_STAND};
use crate::ui::buttons::Btn;
use crate::ui::style::coins;
use serenity::builder::CreateActionRow;
use serenity::model::application::ButtonStyle;

fn show(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| format!("`{c}`"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn table(round: &Round, wager: i64) -> String {
    let player = format!(
        "Your cards: {} = **{}**",
        show(round.player_cards()),
        round.player_value()
    );
    let Some(outcome) = round.outcome() else {
        let upcard = round
            .dealer_cards()
            .first()
            .map(|c| format!("`{c}`"))
            .unwrap_or_default();
        return format!("🃏 Blackjack\n{player}\nDealer shows: {upcard}");
    };

    let dealer = format!(
        "Dealer: {} = **{}**",
        show(round.dealer_cards()),
        round.dealer_value()
    );
    let result = match outcome {
        Outcome::PlayerBust => return format!("🃏 Blackjack\n{player}\nBusted! Lost {}.", coins(wager)),
        Outcome::DealerBust | Outcome::PlayerWins => {
            format!("You win {}!", coins(wager.saturating_mul(outcome.multiplier())))
        }
        Outcome::Push => "Push. Wager refunded.".to_string(),
        Outcome::DealerWins => format!("You lost {}.", coins(wager)),
    };
    format!("🃏 Blackjack\n{player}\n{dealer}\n{result}")
}

/// Hit and Stand, locked once the round is over.
pub fn action_row(round: &Round) -> Vec<CreateActionRow> {
    let finished = round.outcome().is_some();
    vec![CreateActionRow::Buttons(vec![
        Btn::action(BJ_HIT, "Hit", ButtonStyle::Success, finished),
        Btn::action(BJ_STAND, "Stand", ButtonStyle::Primary, finished),
    ])]
}
