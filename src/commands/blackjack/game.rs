//! This is the main controller for the Blackjack game. It implements the `Game` trait
//! on top of the pure `Round` state machine.

use super::state::{Phase, Round};
use super::ui;
use crate::commands::games::shoe::{InfiniteShoe, Shoe};
use crate::commands::games::{Game, GamePayout, GameUpdate};
use crate::constants::BLACKJACK_SESSION_TIMEOUT;
use crate::error::MoveError;
use crate::interactions::ids::{BJ_HIT, BJ_STAND};
use crate::services::wager::Wager;
use serenity::builder::CreateActionRow;
use serenity::model::id::UserId;
use std::time::Duration;

pub struct BlackjackGame {
    pub wager: Wager,
    pub round: Round,
}

impl BlackjackGame {
    pub fn new(wager: Wager, round: Round) -> Self {
        Self { wager, round }
    }

    /// Applies one action drawing from `shoe`. Split out so tests can stack the deck.
    pub fn act(&mut self, custom_id: &str, shoe: &mut impl Shoe) -> Result<GameUpdate, MoveError> {
        let phase = match custom_id {
            BJ_HIT => self.round.hit(shoe)?,
            BJ_STAND => Phase::Finished(self.round.stand(shoe)?),
            _ => return Err(MoveError::UnknownAction),
        };
        Ok(match phase {
            Phase::AwaitingPlayer => GameUpdate::ReRender,
            Phase::Finished(outcome) => {
                let multiplier = outcome.multiplier();
                let payouts = if multiplier > 0 {
                    vec![GamePayout {
                        wager: self.wager,
                        multiplier,
                    }]
                } else {
                    vec![]
                };
                GameUpdate::GameOver { payouts }
            }
        })
    }
}

impl Game for BlackjackGame {
    fn owner(&self) -> UserId {
        self.wager.user_id
    }

    fn timeout(&self) -> Duration {
        BLACKJACK_SESSION_TIMEOUT
    }

    fn handle_action(&mut self, custom_id: &str) -> Result<GameUpdate, MoveError> {
        self.act(custom_id, &mut InfiniteShoe::new(rand::rng()))
    }

    fn render(&self) -> (String, Vec<CreateActionRow>) {
        (
            ui::table(&self.round, self.wager.amount),
            ui::action_row(&self.round),
        )
    }
}
