//! The shared validate -> debit -> resolve -> credit flow behind every game,
//! plus gifts and owner adjustments.

use crate::error::{AccessError, Rejection, WagerError};
use crate::services::balance::BalanceService;
use serenity::model::id::UserId;
use tracing::info;

/// A stake that has already been taken from the player's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wager {
    pub user_id: UserId,
    pub amount: i64,
}

impl Wager {
    pub fn payout(&self, multiplier: i64) -> i64 {
        self.amount.saturating_mul(multiplier.max(0))
    }
}

/// `0 < amount <= balance`.
pub fn validate_wager(amount: i64, balance: i64) -> Result<(), WagerError> {
    if amount <= 0 {
        return Err(WagerError::NonPositive);
    }
    if amount > balance {
        return Err(WagerError::Insufficient { amount, balance });
    }
    Ok(())
}

/// Checks the wager against the current balance and debits it.
/// Nothing is written when validation fails.
pub async fn place_wager(
    balances: &BalanceService,
    user_id: UserId,
    amount: i64,
) -> Result<Wager, WagerError> {
    let remaining = balances.try_debit(user_id, amount).await?;
    info!(target = "games", user_id = %user_id, amount, remaining, "wager placed");
    Ok(Wager { user_id, amount })
}

/// Credits `amount * multiplier` when the multiplier is positive. Returns the
/// credited amount (0 for a loss).
pub async fn settle(balances: &BalanceService, wager: &Wager, multiplier: i64) -> i64 {
    let winnings = wager.payout(multiplier);
    if winnings > 0 {
        balances.update_balance(wager.user_id, winnings).await;
    }
    info!(target = "games", user_id = %wager.user_id, wager = wager.amount, multiplier, winnings, "wager settled");
    winnings
}

/// Moves `amount` from `giver` to `recipient`. Returns the giver's new balance.
pub async fn gift(
    balances: &BalanceService,
    giver: UserId,
    recipient: UserId,
    recipient_is_bot: bool,
    amount: i64,
) -> Result<i64, WagerError> {
    if giver == recipient {
        return Err(WagerError::SelfGift);
    }
    if recipient_is_bot {
        return Err(WagerError::BotRecipient);
    }
    let remaining = balances.try_debit(giver, amount).await?;
    balances.update_balance(recipient, amount).await;
    info!(target = "balance", giver = %giver, recipient = %recipient, amount, "gift sent");
    Ok(remaining)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Add,
    Remove,
}

pub fn require_owner(owner: UserId, invoker: UserId) -> Result<(), AccessError> {
    if owner == invoker {
        Ok(())
    } else {
        Err(AccessError::NotOwner)
    }
}

/// Owner-only `/add` and `/rem`. `amount` must be positive either way.
pub async fn adjust(
    balances: &BalanceService,
    owner: UserId,
    invoker: UserId,
    target: UserId,
    amount: i64,
    kind: Adjustment,
) -> Result<i64, Rejection> {
    require_owner(owner, invoker)?;
    if amount <= 0 {
        return Err(WagerError::NonPositive.into());
    }
    let delta = match kind {
        Adjustment::Add => amount,
        Adjustment::Remove => -amount,
    };
    let balance = balances.update_balance(target, delta).await;
    info!(target = "balance", invoker = %invoker, target_user = %target, delta, balance, "owner adjustment");
    Ok(balance)
}
