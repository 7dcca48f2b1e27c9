//! Handles the command logic for `/gift`.

use crate::AppState;
use crate::interactions::util::{
    deferred_reply, option_i64, option_user, option_user_is_bot, reply_ephemeral, resolved_name,
};
use crate::services::wager::gift;
use crate::ui::style::coins;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("gift")
        .description("Gift coins to another user")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::User,
                "user",
                "The user to gift coins to",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "amount", "Amount to gift")
                .required(true),
        )
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else { return };

    let Some(recipient) = option_user(interaction, "user") else {
        reply_ephemeral(ctx, interaction, "Missing user option".to_string()).await;
        return;
    };
    let amount = option_i64(interaction, "amount").unwrap_or(0);
    let is_bot = option_user_is_bot(interaction, recipient);

    let giver = interaction.user.id;
    let balances = &app_state.balances;
    deferred_reply(&ctx.http, interaction, "gift", async move {
        gift(balances, giver, recipient, is_bot, amount)
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>(format!(
            "🎁 **{}** gifted {} coins to **{}**!",
            interaction.user.display_name(),
            coins(amount),
            resolved_name(interaction, recipient)
        ))
    })
    .await;
}
