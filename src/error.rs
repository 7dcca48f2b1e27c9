//! Error types shared across the bot.
//!
//! Only [`ConfigError`] is ever fatal (at startup). Everything else ends up as a
//! log line or a message shown to the invoking user.

use thiserror::Error;

/// Failures talking to the ledger document host.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("ledger content is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("ledger content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("ledger content is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("ledger document must be a JSON object or array, found {0}")]
    Shape(&'static str),
}

/// Input rejected before any balance is touched. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WagerError {
    #[error("Amount must be greater than 0.")]
    NonPositive,
    #[error("You don't have enough balance. (Wager: {amount}, balance: {balance})")]
    Insufficient { amount: i64, balance: i64 },
    #[error("Invalid choice `{0}`. Pick `red` or `black`.")]
    InvalidChoice(String),
    #[error("You can't gift coins to yourself.")]
    SelfGift,
    #[error("You can't gift coins to bots.")]
    BotRecipient,
}

/// The caller is not allowed to do what they asked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("This command is restricted to the bot owner.")]
    NotOwner,
    #[error("Not your game.")]
    NotYourGame,
    #[error("This game has expired.")]
    Expired,
    #[error("This game is no longer active.")]
    NoSuchGame,
}

/// A button press that the current game state does not accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Game over.")]
    GameOver,
    #[error("That cell is already revealed.")]
    AlreadyRevealed,
    #[error("There is no cell {0} on this board.")]
    OutOfRange(usize),
    #[error("Unknown action.")]
    UnknownAction,
}

/// Why a player could not be messaged. Always swallowed after logging.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("discord request failed: {0}")]
    Discord(#[from] serenity::Error),
    #[error("notifications are disabled")]
    Disabled,
}

/// Anything that turns a command away before it touches a balance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error(transparent)]
    Wager(#[from] WagerError),
    #[error(transparent)]
    Access(#[from] AccessError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
