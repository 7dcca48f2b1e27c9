//! Reel symbols, payout table and reveal frames for `/slots`.

use crate::constants::{SLOTS_PAIR_MULTIPLIER, SLOTS_TRIPLE_MULTIPLIER};
use crate::ui::style::{EMOJI_HIDDEN, coins};
use rand::Rng;
use rand::seq::IndexedRandom;

pub const SYMBOLS: [&str; 6] = ["🍒", "🍋", "🍊", "🍉", "⭐", "7️⃣"];

pub type Reels = [&'static str; 3];

pub fn spin<R: Rng + ?Sized>(rng: &mut R) -> Reels {
    std::array::from_fn(|_| SYMBOLS.choose(rng).copied().unwrap_or(SYMBOLS[0]))
}

/// Three of a kind pays 5x, exactly two of a kind 2x, anything else nothing.
pub fn payout_multiplier(reels: &Reels) -> i64 {
    let [a, b, c] = *reels;
    if a == b && b == c {
        SLOTS_TRIPLE_MULTIPLIER
    } else if a == b || b == c || a == c {
        SLOTS_PAIR_MULTIPLIER
    } else {
        0
    }
}

fn line(shown: &[&str]) -> String {
    format!("🎰 | {}", shown.join(" | "))
}

/// Every intermediate display: all hidden, then one more reel shown per frame
/// from the left.
pub fn reveal_frames(reels: &Reels) -> Vec<String> {
    (0..=reels.len())
        .map(|shown| {
            let cells: Vec<&str> = reels
                .iter()
                .enumerate()
                .map(|(i, s)| if i < shown { *s } else { EMOJI_HIDDEN })
                .collect();
            line(&cells)
        })
        .collect()
}

pub fn result_text(multiplier: i64) -> &'static str {
    match multiplier {
        SLOTS_TRIPLE_MULTIPLIER => "🎉 JACKPOT! All 3 match!",
        SLOTS_PAIR_MULTIPLIER => "✅ 2 match! You win double!",
        _ => "❌ No match. You lost.",
    }
}

pub fn final_message(reels: &Reels, winnings: i64) -> String {
    format!(
        "{}\n{}\nWinnings: {}",
        line(reels),
        result_text(payout_multiplier(reels)),
        coins(winnings)
    )
}
