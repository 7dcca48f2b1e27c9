//! Handles the `/slots` slash command with a reel-by-reel reveal.

use super::logic::{final_message, payout_multiplier, reveal_frames, spin};
use crate::AppState;
use crate::constants::{SLOTS_REEL_DELAY, SLOTS_RESULT_DELAY};
use crate::interactions::util::{defer, edit_original, option_i64, reject_deferred, respond};
use crate::services::wager::{place_wager, settle};
use serenity::builder::{CreateCommand, CreateCommandOption, EditInteractionResponse};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::*;
use tokio::time::sleep;

pub fn register() -> CreateCommand {
    CreateCommand::new("slots")
        .description("Play interactive slots!")
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

    let reels = spin(&mut rand::rng());
    let mut frames = reveal_frames(&reels).into_iter();
    let Some(first) = frames.next() else { return };
    respond(&ctx.http, interaction, "slots.start", first).await;

    for frame in frames {
        sleep(SLOTS_REEL_DELAY).await;
        edit_original(ctx, interaction, "slots.reel", EditInteractionResponse::new().content(frame))
            .await;
    }

    let winnings = settle(&app_state.balances, &wager, payout_multiplier(&reels)).await;
    sleep(SLOTS_RESULT_DELAY).await;
    edit_original(
        ctx,
        interaction,
        "slots.result",
        EditInteractionResponse::new().content(final_message(&reels, winnings)),
    )
    .await;
}
