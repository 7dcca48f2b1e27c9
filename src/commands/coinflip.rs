//! Implements the `/coinflip` command.

use crate::AppState;
use crate::constants::COINFLIP_MULTIPLIER;
use crate::interactions::util::{deferred_reply, option_i64};
use crate::services::wager::{place_wager, settle};
use crate::ui::style::coins;
use rand::Rng;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::*;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Heads,
    Tails,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Heads => write!(f, "🪙 Heads"),
            Face::Tails => write!(f, "🪙 Tails"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flip {
    /// Shown to the player only; it does not decide the result.
    pub face: Face,
    pub won: bool,
}

impl Flip {
    pub fn multiplier(self) -> i64 {
        if self.won { COINFLIP_MULTIPLIER } else { 0 }
    }
}

pub fn flip<R: Rng + ?Sized>(rng: &mut R) -> Flip {
    let face = if rng.random_bool(0.5) {
        Face::Heads
    } else {
        Face::Tails
    };
    Flip {
        face,
        won: rng.random_bool(0.5),
    }
}

pub fn register() -> CreateCommand {
    CreateCommand::new("coinflip")
        .description("Wager on a coin flip")
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "amount", "Amount to wager")
                .required(true),
        )
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else { return };
    let amount = option_i64(interaction, "amount").unwrap_or(0);
    let balances = &app_state.balances;
    let user_id = interaction.user.id;

    deferred_reply(&ctx.http, interaction, "coinflip", async move {
        let wager = place_wager(balances, user_id, amount)
            .await
            .map_err(|e| e.to_string())?;
        let result = flip(&mut rand::rng());
        let winnings = settle(balances, &wager, result.multiplier()).await;
        Ok::<_, String>(if result.won {
            format!("You flipped **{}** and won {}!", result.face, coins(winnings))
        } else {
            format!("You flipped **{}** and lost your wager.", result.face)
        })
    })
    .await;
}
