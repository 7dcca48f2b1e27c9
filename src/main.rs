use std::sync::Arc;

use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use wagerbot::config::{BotConfig, LedgerBackend};
use wagerbot::handler::Handler;
use wagerbot::ledger::{GithubLedgerStore, LedgerStore, MemoryLedgerStore};
use wagerbot::services::{BalanceService, DiscordNotifier, WelcomeGrant};
use wagerbot::{AppState, health};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wagerbot=info,serenity=warn")),
        )
        .init();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let store: Arc<dyn LedgerStore> = match &config.ledger {
        LedgerBackend::Github {
            api_base,
            repo,
            path,
            token,
        } => match GithubLedgerStore::new(api_base, repo, path, token.clone()) {
            Ok(store) => {
                info!(target = "ledger", url = store.contents_url(), "using GitHub ledger");
                Arc::new(store)
            }
            Err(e) => {
                error!("failed to build ledger client: {e}");
                std::process::exit(1);
            }
        },
        LedgerBackend::Memory => {
            info!(target = "ledger", "using in-memory ledger; balances are not persisted");
            Arc::new(MemoryLedgerStore::new())
        }
    };

    // Slash commands and components only; no message content needed.
    let intents = GatewayIntents::GUILDS;

    let mut client = match Client::builder(&config.discord_token, intents)
        .event_handler(Handler {
            guild_id: config.guild_id,
        })
        .await
    {
        Ok(client) => client,
        Err(e) => {
            error!("error creating the Discord client: {e:?}");
            std::process::exit(1);
        }
    };

    let balances = BalanceService::new(
        store,
        Arc::new(DiscordNotifier::new(client.http.clone())),
        config.policy,
        WelcomeGrant {
            amount: config.welcome_grant,
            delay: config.welcome_delay,
        },
    );
    info!(policy = %config.policy, mines_bombs = config.mines_bombs, "starting");

    let health_port = config.health_port;
    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(Arc::new(AppState::new(balances, config)));
    }

    tokio::spawn(async move {
        if let Err(e) = health::serve(health_port).await {
            error!(target = "health", error = ?e, "health endpoint stopped");
        }
    });

    if let Err(why) = client.start().await {
        error!("client error: {why:?}");
    }
}
