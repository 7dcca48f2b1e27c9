//! Handles all component interactions that are managed by the generic `GameManager`.
//! This includes Mines and Blackjack.

use crate::AppState;
use crate::commands::games::{Dispatch, Game, GameManager};
use crate::interactions::util::reject_component;
use crate::services::wager::settle;
use serenity::builder::{
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
    EditMessage,
};
use serenity::model::application::{CommandInteraction, ComponentInteraction};
use serenity::model::id::{ChannelId, MessageId};
use serenity::prelude::Context;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

pub async fn handle(ctx: &Context, component: &ComponentInteraction, app_state: Arc<AppState>) {
    // The lock is released before any Discord or ledger call.
    let outcome = {
        let mut game_manager = app_state.game_manager.write().await;
        game_manager.dispatch(
            component.message.id,
            component.user.id,
            &component.data.custom_id,
            Instant::now(),
        )
    };

    match outcome {
        Dispatch::Rejected(reason) => {
            debug!(target="games", cid=%component.data.custom_id, user_id=%component.user.id, %reason, "action rejected");
            reject_component(ctx, component, reason).await;
        }
        Dispatch::Updated {
            content,
            components,
        } => {
            let builder = CreateInteractionResponseMessage::new()
                .content(content)
                .components(components);
            if let Err(e) = component
                .create_response(&ctx.http, CreateInteractionResponse::UpdateMessage(builder))
                .await
            {
                error!(target="ui.update", cid=%component.data.custom_id, error=?e, "update failed");
            }
        }
        Dispatch::Finished {
            content,
            components,
            payouts,
        } => {
            let builder = CreateInteractionResponseMessage::new()
                .content(content)
                .components(components);
            if let Err(e) = component
                .create_response(&ctx.http, CreateInteractionResponse::UpdateMessage(builder))
                .await
            {
                error!(target="ui.update", cid=%component.data.custom_id, error=?e, "final update failed");
            }
            // Credited after answering so the ledger round-trip can't time out the interaction.
            for payout in &payouts {
                settle(&app_state.balances, &payout.wager, payout.multiplier).await;
            }
            info!(target="games", message_id=%component.message.id, payouts=payouts.len(), "session finished");
        }
    }
}

/// Fills the deferred command response with the game's first rendering,
/// registers the session under that message, and schedules its expiry.
pub async fn start_session(
    ctx: &Context,
    interaction: &CommandInteraction,
    game_manager: Arc<RwLock<GameManager>>,
    game: Box<dyn Game>,
) {
    let (content, components) = game.render();
    let timeout = game.timeout();
    let builder = EditInteractionResponse::new()
        .content(content)
        .components(components);
    let game_msg = match interaction.edit_response(&ctx.http, builder).await {
        Ok(msg) => msg,
        Err(e) => {
            error!(target="games", cmd=%interaction.data.name, error=?e, "failed to send game message");
            return;
        }
    };

    game_manager.write().await.start_game(game_msg.id, game);
    schedule_expiry(ctx, game_manager, game_msg.channel_id, game_msg.id, timeout);
}

/// After `timeout`, drops the session if it is still live and strips its buttons.
pub fn schedule_expiry(
    ctx: &Context,
    game_manager: Arc<RwLock<GameManager>>,
    channel_id: ChannelId,
    message_id: MessageId,
    timeout: std::time::Duration,
) {
    let http = ctx.http.clone();
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;

        let Some(last) = game_manager.write().await.expire(&message_id) else {
            return;
        };
        info!(target="games", %message_id, "session expired");

        let builder = EditMessage::new()
            .content(format!("{last}\n⌛ This game has expired."))
            .components(vec![]);
        if let Err(e) = channel_id.edit_message(&http, message_id, builder).await {
            debug!(target="ui.expire", %message_id, error=?e, "failed to clear expired game");
        }
    });
}
