//! Central UI style constants and helpers.
use crate::util::format_amount;

pub const EMOJI_COIN: &str = "💰";
pub const EMOJI_HIDDEN: &str = "❔";
pub const EMOJI_GEM: &str = "💎";
pub const EMOJI_BOMB: &str = "💣";

/// Bold, grouped coin amount for message text: `**2,000**`.
pub fn coins(amount: i64) -> String {
    format!("**{}**", format_amount(amount))
}
