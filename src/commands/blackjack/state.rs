//! Rules and state for one single-player Blackjack round.
//!
//! `Round` is a plain state machine: `hit`/`stand` take the card source as an
//! argument so the same round can be replayed with a stacked shoe.

use crate::commands::games::card::{Card, Rank};
use crate::commands::games::shoe::Shoe;
use crate::constants::{BLACKJACK_PUSH_MULTIPLIER, BLACKJACK_WIN_MULTIPLIER};
use crate::error::MoveError;

pub const BUST_LIMIT: u32 = 21;
pub const DEALER_STANDS_ON: u32 = 17;

/// Aces count 11 and drop to 1, one at a time, while the total is over 21.
pub fn hand_value(cards: &[Card]) -> u32 {
    let mut total: u32 = cards.iter().map(|c| c.rank.value()).sum();
    let mut high_aces = cards.iter().filter(|c| c.rank == Rank::Ace).count();
    while total > BUST_LIMIT && high_aces > 0 {
        total -= 10;
        high_aces -= 1;
    }
    total
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerBust,
    DealerBust,
    PlayerWins,
    Push,
    DealerWins,
}

impl Outcome {
    /// What the wager is multiplied by on payout (it was debited up front).
    pub fn multiplier(self) -> i64 {
        match self {
            Outcome::DealerBust | Outcome::PlayerWins => BLACKJACK_WIN_MULTIPLIER,
            Outcome::Push => BLACKJACK_PUSH_MULTIPLIER,
            Outcome::PlayerBust | Outcome::DealerWins => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingPlayer,
    Finished(Outcome),
}

#[derive(Debug, Clone)]
pub struct Round {
    player: Vec<Card>,
    dealer: Vec<Card>,
    phase: Phase,
}

impl Round {
    /// Two cards to the player, then two to the dealer.
    pub fn deal(shoe: &mut impl Shoe) -> Self {
        let player = vec![shoe.draw(), shoe.draw()];
        let dealer = vec![shoe.draw(), shoe.draw()];
        Self::from_hands(player, dealer)
    }

    pub fn from_hands(player: Vec<Card>, dealer: Vec<Card>) -> Self {
        Self {
            player,
            dealer,
            phase: Phase::AwaitingPlayer,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            Phase::AwaitingPlayer => None,
        }
    }

    pub fn player_cards(&self) -> &[Card] {
        &self.player
    }

    pub fn dealer_cards(&self) -> &[Card] {
        &self.dealer
    }

    pub fn player_value(&self) -> u32 {
        hand_value(&self.player)
    }

    pub fn dealer_value(&self) -> u32 {
        hand_value(&self.dealer)
    }

    /// Draws one card for the player. Going over 21 ends the round.
    pub fn hit(&mut self, shoe: &mut impl Shoe) -> Result<Phase, MoveError> {
        if self.phase != Phase::AwaitingPlayer {
            return Err(MoveError::GameOver);
        }
        self.player.push(shoe.draw());
        if self.player_value() > BUST_LIMIT {
            self.phase = Phase::Finished(Outcome::PlayerBust);
        }
        Ok(self.phase)
    }

    /// Dealer draws while under 17 (stands on every 17, soft or hard), then
    /// the hands are compared.
    pub fn stand(&mut self, shoe: &mut impl Shoe) -> Result<Outcome, MoveError> {
        if self.phase != Phase::AwaitingPlayer {
            return Err(MoveError::GameOver);
        }
        while self.dealer_value() < DEALER_STANDS_ON {
            self.dealer.push(shoe.draw());
        }
        let (player, dealer) = (self.player_value(), self.dealer_value());
        let outcome = if dealer > BUST_LIMIT {
            Outcome::DealerBust
        } else if player > dealer {
            Outcome::PlayerWins
        } else if player == dealer {
            Outcome::Push
        } else {
            Outcome::DealerWins
        };
        self.phase = Phase::Finished(outcome);
        Ok(outcome)
    }
}
