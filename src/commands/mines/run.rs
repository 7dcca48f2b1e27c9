//! Handles the `/mines` slash command.

use super::game::MinesGame;
use super::state::MinesBoard;
use crate::AppState;
use crate::interactions::game_handler::start_session;
use crate::interactions::util::{defer, option_i64, reject_deferred};
use crate::services::wager::place_wager;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("mines")
        .description("Play Mines 5x5")
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "amount", "Amount to wager")
                .required(true),
        )
}

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

    // ThreadRng is not Send; keep it out of any await.
    let board = MinesBoard::new(app_state.config.mines_bombs, &mut rand::rng());
    let game = MinesGame::new(wager, board);
    start_session(ctx, interaction, app_state.game_manager.clone(), Box::new(game)).await;
}
