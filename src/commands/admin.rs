use crate::AppState;
use crate::interactions::util::{
    deferred_reply, option_i64, option_user, reply_ephemeral, resolved_name,
};
use crate::services::wager::{Adjustment, adjust};
use crate::ui::style::coins;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::Context;

// Owner-only balance adjustments.
fn register_adjustment(name: &str, description: &str, user_hint: &str, amount_hint: &str) -> CreateCommand {
    CreateCommand::new(name)
        .description(description)
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", user_hint).required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "amount", amount_hint)
                .required(true),
        )
}

pub fn register_add() -> CreateCommand {
    register_adjustment(
        "add",
        "Add coins to a user's balance (owner only)",
        "The user to add coins to",
        "Amount to add",
    )
}

pub fn register_rem() -> CreateCommand {
    register_adjustment(
        "rem",
        "Remove coins from a user's balance (owner only)",
        "The user to remove coins from",
        "Amount to remove",
    )
}

pub async fn run(ctx: &Context, interaction: &CommandInteraction, kind: Adjustment) {
    let Some(app_state) = AppState::from_ctx(ctx).await else { return };
    let Some(target) = option_user(interaction, "user") else {
        reply_ephemeral(ctx, interaction, "Missing user option".to_string()).await;
        return;
    };
    let amount = option_i64(interaction, "amount").unwrap_or(0);
    let balances = &app_state.balances;
    let owner = app_state.config.owner_id;
    let invoker = interaction.user.id;

    deferred_reply(&ctx.http, interaction, "admin", async move {
        let balance = adjust(balances, owner, invoker, target, amount, kind)
            .await
            .map_err(|e| e.to_string())?;
        let name = resolved_name(interaction, target);
        Ok::<_, String>(match kind {
            Adjustment::Add => format!(
                "✅ Added {} coins to **{name}**. New balance: {}.",
                coins(amount),
                coins(balance)
            ),
            Adjustment::Remove => format!(
                "✅ Removed {} coins from **{name}**. New balance: {}.",
                coins(amount),
                coins(balance)
            ),
        })
    })
    .await;
}
