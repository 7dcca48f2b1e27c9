//! Shared interaction utility helpers: option lookup, replies, deferred responses.
use serenity::builder::{
    CreateInteractionResponse, CreateInteractionResponseFollowup, CreateInteractionResponseMessage,
    EditInteractionResponse,
};
use serenity::http::Http;
use serenity::model::application::{CommandInteraction, ComponentInteraction};
use serenity::model::id::UserId;
use serenity::prelude::Context;

pub fn option_i64(interaction: &CommandInteraction, name: &str) -> Option<i64> {
    interaction
        .data
        .options
        .iter()
        .find(|o| o.name == name)
        .and_then(|o| o.value.as_i64())
}

pub fn option_str<'a>(interaction: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    interaction
        .data
        .options
        .iter()
        .find(|o| o.name == name)
        .and_then(|o| o.value.as_str())
}

pub fn option_user(interaction: &CommandInteraction, name: &str) -> Option<UserId> {
    interaction
        .data
        .options
        .iter()
        .find(|o| o.name == name)
        .and_then(|o| o.value.as_user_id())
}

/// Whether a user picked in a user option is a bot, from the resolved data.
pub fn option_user_is_bot(interaction: &CommandInteraction, user_id: UserId) -> bool {
    interaction
        .data
        .resolved
        .users
        .get(&user_id)
        .is_some_and(|u| u.bot)
}

/// Display name for a user the command resolved, falling back to a mention.
pub fn resolved_name(interaction: &CommandInteraction, user_id: UserId) -> String {
    interaction
        .data
        .resolved
        .users
        .get(&user_id)
        .map(|u| u.global_name.clone().unwrap_or_else(|| u.name.clone()))
        .unwrap_or_else(|| format!("<@{user_id}>"))
}

/// Reply visible only to the invoking user.
pub async fn reply_ephemeral(ctx: &Context, interaction: &CommandInteraction, content: String) {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    );
    if let Err(e) = interaction.create_response(&ctx.http, response).await {
        tracing::debug!(target="ui.reply", cmd=%interaction.data.name, error=?e, "ephemeral reply failed");
    }
}

/// Ephemeral reply to a button press; the game message is left untouched.
pub async fn reject_component(ctx: &Context, c: &ComponentInteraction, content: String) {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    );
    if let Err(e) = c.create_response(&ctx.http, response).await {
        tracing::debug!(target="ui.reject", cid=%c.data.custom_id, error=?e, "ephemeral reply failed");
    }
}

/// Edit original interaction response; logs failure with a tag for observability.
pub async fn edit_original(
    ctx: &Context,
    interaction: &CommandInteraction,
    tag: &str,
    builder: EditInteractionResponse,
) {
    if let Err(e) = interaction.edit_response(&ctx.http, builder).await {
        tracing::error!(target="ui.edit", cmd=%interaction.data.name, tag=%tag, error=?e, "edit_response failed");
    }
}

/// Acknowledges a slash command before any ledger round trip. Returns false
/// when Discord refused the acknowledgement; the command should stop there.
pub async fn defer(http: &Http, interaction: &CommandInteraction) -> bool {
    let response = CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new());
    match interaction.create_response(http, response).await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(target="ui.defer", cmd=%interaction.data.name, error=?e, "defer failed");
            false
        }
    }
}

/// Fills in a deferred response with plain text.
pub async fn respond(http: &Http, interaction: &CommandInteraction, tag: &str, content: String) {
    let builder = EditInteractionResponse::new().content(content);
    if let Err(e) = interaction.edit_response(http, builder).await {
        tracing::error!(target="ui.edit", cmd=%interaction.data.name, tag=%tag, error=?e, "edit_response failed");
    }
}

/// Rejection after `defer`: the public placeholder is removed and the reason
/// goes to the caller only.
pub async fn reject_deferred(http: &Http, interaction: &CommandInteraction, content: String) {
    if let Err(e) = interaction.delete_response(http).await {
        tracing::debug!(target="ui.reply", cmd=%interaction.data.name, error=?e, "placeholder not removed");
    }
    let followup = CreateInteractionResponseFollowup::new()
        .content(content)
        .ephemeral(true);
    if let Err(e) = interaction.create_followup(http, followup).await {
        tracing::debug!(target="ui.reply", cmd=%interaction.data.name, error=?e, "ephemeral follow-up failed");
    }
}

/// Defers, then runs `work` and answers with its text: in the channel on
/// success, to the caller only on rejection. `work` does not start until the
/// acknowledgement is out.
pub async fn deferred_reply<F>(http: &Http, interaction: &CommandInteraction, tag: &str, work: F)
where
    F: Future<Output = Result<String, String>>,
{
    if !defer(http, interaction).await {
        return;
    }
    match work.await {
        Ok(content) => respond(http, interaction, tag, content).await,
        Err(reason) => reject_deferred(http, interaction, reason).await,
    }
}
