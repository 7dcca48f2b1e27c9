// Central constants for payouts, timings and defaults.
use std::time::Duration;

pub const WELCOME_GRANT: i64 = 2000;
pub const WELCOME_DELAY: Duration = Duration::from_secs(60);

pub const COINFLIP_MULTIPLIER: i64 = 2;
pub const ROULETTE_MULTIPLIER: i64 = 2;
pub const MINES_CLEAR_MULTIPLIER: i64 = 5;
pub const BLACKJACK_WIN_MULTIPLIER: i64 = 2;
pub const BLACKJACK_PUSH_MULTIPLIER: i64 = 1;
pub const SLOTS_TRIPLE_MULTIPLIER: i64 = 5;
pub const SLOTS_PAIR_MULTIPLIER: i64 = 2;

pub const MINES_CELLS: usize = 25;
pub const MINES_ROW_WIDTH: usize = 5;
// Overridable via MINES_BOMBS; some deployments run 10.
pub const DEFAULT_MINES_BOMBS: usize = 5;

pub const MINES_SESSION_TIMEOUT: Duration = Duration::from_secs(120);
pub const BLACKJACK_SESSION_TIMEOUT: Duration = Duration::from_secs(60);

pub const SLOTS_REEL_DELAY: Duration = Duration::from_secs(1);
pub const SLOTS_RESULT_DELAY: Duration = Duration::from_millis(500);

pub const DEFAULT_LEDGER_API: &str = "https://api.github.com";
pub const DEFAULT_LEDGER_REPO: &str = "chesslindan-ops/personal";
pub const DEFAULT_LEDGER_PATH: &str = "gamblingrec.json";
pub const LEDGER_COMMIT_MESSAGE: &str = "update balances";
pub const LEDGER_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_HEALTH_PORT: u16 = 8080;

/// The hosted bot's owner; `OWNER_ID` replaces it.
pub const DEFAULT_OWNER_ID: u64 = 1329161792936476683;
