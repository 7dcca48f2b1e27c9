//! Implements the `/bal` command.

use crate::AppState;
use crate::interactions::util::deferred_reply;
use crate::ui::style::{EMOJI_COIN, coins};
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("bal").description("Check your balance")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else { return };
    let balances = &app_state.balances;
    let user = &interaction.user;

    deferred_reply(&ctx.http, interaction, "bal", async move {
        let balance = balances.get_balance(user.id).await;
        Ok::<_, String>(format!(
            "{EMOJI_COIN} **{}**, your balance is {} coins.",
            user.display_name(),
            coins(balance)
        ))
    })
    .await;
}
