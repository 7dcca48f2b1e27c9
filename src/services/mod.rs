//! Balance bookkeeping used by every command.

pub mod balance;
pub mod notify;
pub mod wager;

pub use balance::{BalanceService, ConsistencyPolicy, WelcomeGrant};
pub use notify::{DiscordNotifier, Notifier, SilentNotifier};
