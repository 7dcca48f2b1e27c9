//! Implements the `/roulette` command (red/black only).

use crate::AppState;
use crate::constants::ROULETTE_MULTIPLIER;
use crate::error::WagerError;
use crate::interactions::util::{deferred_reply, option_i64, option_str, reply_ephemeral};
use crate::services::wager::{place_wager, settle};
use crate::ui::style::coins;
use rand::Rng;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::*;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl FromStr for Color {
    type Err = WagerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "black" => Ok(Color::Black),
            _ => Err(WagerError::InvalidChoice(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}

pub fn spin<R: Rng + ?Sized>(rng: &mut R) -> Color {
    if rng.random_bool(0.5) {
        Color::Red
    } else {
        Color::Black
    }
}

pub fn multiplier(choice: Color, landed: Color) -> i64 {
    if choice == landed { ROULETTE_MULTIPLIER } else { 0 }
}

pub fn register() -> CreateCommand {
    CreateCommand::new("roulette")
        .description("Red/Black roulette")
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "amount", "Amount to wager")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "choice", "red or black")
                .required(true),
        )
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else { return };
    let amount = option_i64(interaction, "amount").unwrap_or(0);

    // The choice is checked before any balance is touched.
    let choice = match option_str(interaction, "choice").unwrap_or_default().parse::<Color>() {
        Ok(choice) => choice,
        Err(e) => {
            reply_ephemeral(ctx, interaction, e.to_string()).await;
            return;
        }
    };

    let balances = &app_state.balances;
    let user_id = interaction.user.id;
    deferred_reply(&ctx.http, interaction, "roulette", async move {
        let wager = place_wager(balances, user_id, amount)
            .await
            .map_err(|e| e.to_string())?;
        let landed = spin(&mut rand::rng());
        let winnings = settle(balances, &wager, multiplier(choice, landed)).await;
        Ok::<_, String>(if winnings > 0 {
            format!("Ball landed on **{landed}**. You won {}!", coins(winnings))
        } else {
            format!("Ball landed on **{landed}**. You lost.")
        })
    })
    .await;
}
