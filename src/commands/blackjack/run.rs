//! This module contains the `run` function for the Blackjack command,
//! taking the wager and starting a new session.

use super::game::BlackjackGame;
use super::state::Round;
use crate::AppState;
use crate::commands::games::shoe::InfiniteShoe;
use crate::interactions::game_handler::start_session;
use crate::interactions::util::{defer, option_i64, reject_deferred};
use crate::services::wager::place_wager;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("blackjack")
        .description("Play Blackjack against the dealer")
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "amount", "Amount to wager")
                .required(true),
        )
}

/// Entry point for the `/blackjack` slash command.
pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else { return };
    let amount = option_i64(interaction, "amount").unwrap_or(0);

    if !defer(&ctx.http, interaction).await {
        return;
    }
    let wager = match place_wager(&app_state.balances, interaction.user.id, amount).await {
        Ok(wager) => wager,
        Err(e) => {
            reject_deferred(&ctx.http, interaction, e.to_string()).await;
            return;
        }
    };

    let round = Round::deal(&mut InfiniteShoe::new(rand::rng()));
    let game = BlackjackGame::new(wager, round);
    start_session(ctx, interaction, app_state.game_manager.clone(), Box::new(game)).await;
}
