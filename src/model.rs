//! Service context handed to every command and component handler.

use crate::commands::games::engine::GameManager;
use crate::config::BotConfig;
use crate::services::BalanceService;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Built once in `main` and stored in the client's `TypeMap` as `Arc<AppState>`.
pub struct AppState {
    /// Balance reads and writes against the ledger document.
    pub balances: BalanceService,
    /// The manager for all live Mines and Blackjack sessions.
    pub game_manager: Arc<RwLock<GameManager>>,
    pub config: Arc<BotConfig>,
}

impl AppState {
    pub fn new(balances: BalanceService, config: BotConfig) -> Self {
        Self {
            balances,
            game_manager: Arc::new(RwLock::new(GameManager::new())),
            config: Arc::new(config),
        }
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
