//! Runtime configuration, read from the environment (optionally via `.env`).

use crate::constants::{
    DEFAULT_HEALTH_PORT, DEFAULT_LEDGER_API, DEFAULT_LEDGER_PATH, DEFAULT_LEDGER_REPO,
    DEFAULT_MINES_BOMBS, DEFAULT_OWNER_ID, MINES_CELLS, WELCOME_DELAY, WELCOME_GRANT,
};
use crate::error::ConfigError;
use crate::services::balance::ConsistencyPolicy;
use serenity::model::id::{GuildId, UserId};
use std::num::NonZeroU64;
use std::str::FromStr;
use std::time::Duration;

/// Which store holds the ledger document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerBackend {
    /// GitHub contents API (or anything speaking the same protocol).
    Github {
        api_base: String,
        repo: String,
        path: String,
        token: String,
    },
    /// Process-local document; balances vanish on restart.
    Memory,
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub discord_token: String,
    pub ledger: LedgerBackend,
    pub policy: ConsistencyPolicy,
    /// The single identity allowed to run `/add` and `/rem`.
    pub owner_id: UserId,
    /// Register commands to this guild only; global registration when absent.
    pub guild_id: Option<GuildId>,
    pub health_port: u16,
    pub mines_bombs: usize,
    pub welcome_grant: i64,
    pub welcome_delay: Duration,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any name -> value lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let discord_token = get("DISCORD_TOKEN").ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;

        let ledger = match get("LEDGER_BACKEND").as_deref().unwrap_or("github") {
            "github" => LedgerBackend::Github {
                api_base: get("LEDGER_API")
                    .unwrap_or_else(|| DEFAULT_LEDGER_API.to_string())
                    .trim_end_matches('/')
                    .to_string(),
                repo: get("LEDGER_REPO").unwrap_or_else(|| DEFAULT_LEDGER_REPO.to_string()),
                path: get("LEDGER_PATH").unwrap_or_else(|| DEFAULT_LEDGER_PATH.to_string()),
                token: get("GITHUB_TOKEN").ok_or(ConfigError::Missing("GITHUB_TOKEN"))?,
            },
            "memory" => LedgerBackend::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    name: "LEDGER_BACKEND",
                    reason: format!("expected `github` or `memory`, got `{other}`"),
                });
            }
        };

        let policy = match get("LEDGER_POLICY") {
            Some(raw) => raw.parse().map_err(|reason| ConfigError::Invalid {
                name: "LEDGER_POLICY",
                reason,
            })?,
            None => ConsistencyPolicy::default(),
        };

        let owner_id = parse_opt::<NonZeroU64>(&get, "OWNER_ID")?
            .map_or(UserId::new(DEFAULT_OWNER_ID), UserId::from);
        let guild_id = parse_opt::<NonZeroU64>(&get, "SERVER_ID")?.map(GuildId::from);
        let health_port = parse_opt(&get, "PORT")?.unwrap_or(DEFAULT_HEALTH_PORT);

        let mines_bombs = parse_opt(&get, "MINES_BOMBS")?.unwrap_or(DEFAULT_MINES_BOMBS);
        if mines_bombs == 0 || mines_bombs >= MINES_CELLS {
            return Err(ConfigError::Invalid {
                name: "MINES_BOMBS",
                reason: format!("must be between 1 and {}", MINES_CELLS - 1),
            });
        }

        let welcome_grant = parse_opt(&get, "WELCOME_GRANT")?.unwrap_or(WELCOME_GRANT);
        let welcome_delay = parse_opt(&get, "WELCOME_DELAY_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(WELCOME_DELAY);

        Ok(Self {
            discord_token,
            ledger,
            policy,
            owner_id,
            guild_id,
            health_port,
            mines_bombs,
            welcome_grant,
            welcome_delay,
        })
    }
}

fn parse_opt<T>(
    get: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get(name)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
                name,
                reason: e.to_string(),
            })
        })
        .transpose()
}
