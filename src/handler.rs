use crate::interactions::ids::{Family, family};
use crate::services::wager::Adjustment;
use crate::{AppState, commands, interactions};
use serenity::async_trait;
use serenity::builder::CreateCommand;
use serenity::client::Context;
use serenity::model::application::{Command, Interaction};
use serenity::model::{gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use tracing::{debug, error, info, warn};

pub struct Handler {
    /// Register commands to this guild only; globally when `None`.
    pub guild_id: Option<GuildId>,
}

/// Every slash command the bot exposes.
pub fn all_commands() -> Vec<CreateCommand> {
    vec![
        commands::coinflip::register(),
        commands::roulette::register(),
        commands::mines::register(),
        commands::blackjack::register(),
        commands::slots::register(),
        commands::economy::balance::register(),
        commands::economy::gift::register(),
        commands::admin::register_add(),
        commands::admin::register_rem(),
        commands::help::register(),
    ]
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            error!(target = "handler", "AppState missing from context");
            return;
        };
        match &interaction {
            Interaction::Command(command) => {
                debug!(target="handler", cmd=%command.data.name, user_id=%command.user.id, "slash command");
                match command.data.name.as_str() {
                    "coinflip" => commands::coinflip::run_slash(&ctx, command).await,
                    "roulette" => commands::roulette::run_slash(&ctx, command).await,
                    "mines" => commands::mines::run_slash(&ctx, command).await,
                    "blackjack" => commands::blackjack::run_slash(&ctx, command).await,
                    "slots" => commands::slots::run_slash(&ctx, command).await,
                    "bal" => commands::economy::bal_slash(&ctx, command).await,
                    "gift" => commands::economy::gift_slash(&ctx, command).await,
                    "add" => commands::admin::run(&ctx, command, Adjustment::Add).await,
                    "rem" => commands::admin::run(&ctx, command, Adjustment::Remove).await,
                    "help" => commands::help::run_slash(&ctx, command).await,
                    other => warn!(target = "handler", cmd = other, "unknown command"),
                }
            }
            Interaction::Component(component) => {
                let cid = component.data.custom_id.as_str();
                match family(cid) {
                    Some(Family::Mines | Family::Blackjack) => {
                        interactions::game_handler::handle(&ctx, component, app_state).await
                    }
                    None if cid == commands::help::HELP_SELECT_ID => {
                        commands::help::handle_interaction(&ctx, component).await
                    }
                    None => debug!(target = "handler", cid, "unrouted component"),
                }
            }
            _ => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(target = "handler", user = %ready.user.name, "connected and ready");
        let commands_to_register = all_commands();
        let count = commands_to_register.len();
        match self.guild_id {
            Some(guild_id) => match guild_id.set_commands(&ctx.http, commands_to_register).await {
                Ok(_) => info!(target = "handler", %guild_id, count, "registered guild commands"),
                Err(e) => error!(target = "handler", %guild_id, error = ?e, "error creating guild commands"),
            },
            None => match Command::set_global_commands(&ctx.http, commands_to_register).await {
                Ok(_) => info!(target = "handler", count, "registered global commands"),
                Err(e) => error!(target = "handler", error = ?e, "error creating global commands"),
            },
        }
    }
}
