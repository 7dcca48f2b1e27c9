//! Balance operations on top of a [`LedgerStore`].
//!
//! Every operation is a full read-modify-write of the ledger document. Under
//! [`ConsistencyPolicy::Unsynchronized`] two overlapping calls can both read
//! the same revision and the later write silently discards the earlier one.
//! [`ConsistencyPolicy::Serialized`], the default, runs each cycle under one
//! process-wide lock so updates made by this process are never lost. The lock
//! is global, not per user: each write replaces the whole document.

use crate::constants::{WELCOME_DELAY, WELCOME_GRANT};
use crate::error::WagerError;
use crate::ledger::{Ledger, LedgerSnapshot, LedgerStore, RevisionToken};
use crate::services::notify::Notifier;
use crate::services::wager::validate_wager;
use crate::util::format_amount;
use serenity::model::id::UserId;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsistencyPolicy {
    #[default]
    Serialized,
    Unsynchronized,
}

impl FromStr for ConsistencyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "serialized" => Ok(Self::Serialized),
            "unsynchronized" => Ok(Self::Unsynchronized),
            other => Err(format!(
                "expected `serialized` or `unsynchronized`, got `{other}`"
            )),
        }
    }
}

impl fmt::Display for ConsistencyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Serialized => "serialized",
            Self::Unsynchronized => "unsynchronized",
        })
    }
}

/// Starting balance handed to a new player once `delay` has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WelcomeGrant {
    pub amount: i64,
    pub delay: Duration,
}

impl Default for WelcomeGrant {
    fn default() -> Self {
        Self {
            amount: WELCOME_GRANT,
            delay: WELCOME_DELAY,
        }
    }
}

#[derive(Clone)]
pub struct BalanceService {
    store: Arc<dyn LedgerStore>,
    notifier: Arc<dyn Notifier>,
    policy: ConsistencyPolicy,
    welcome: WelcomeGrant,
    gate: Arc<Mutex<()>>,
}

impl BalanceService {
    pub fn new(
        store: Arc<dyn LedgerStore>,
        notifier: Arc<dyn Notifier>,
        policy: ConsistencyPolicy,
        welcome: WelcomeGrant,
    ) -> Self {
        Self {
            store,
            notifier,
            policy,
            welcome,
            gate: Arc::new(Mutex::new(())),
        }
    }

    /// Current balance. An unknown player is registered as a side effect and
    /// reads as 0 until the welcome grant lands.
    pub async fn get_balance(&self, user_id: UserId) -> i64 {
        if let Some(balance) = self.snapshot().await.ledger.balance(user_id) {
            return balance;
        }
        // The grant task runs detached.
        if self.ensure_new_player(user_id).await.is_none() {
            debug!(target = "balance", user_id = %user_id, "player registered concurrently");
        }
        0
    }

    /// Registers a first-contact player: writes a zero entry, tells them a
    /// grant is coming, and schedules the grant. Returns the grant task only
    /// when this call did the registering.
    pub async fn ensure_new_player(&self, user_id: UserId) -> Option<JoinHandle<i64>> {
        {
            let _gate = self.enter().await;
            let mut snapshot = self.snapshot().await;
            if !snapshot.ledger.insert_if_absent(user_id) {
                return None;
            }
            self.commit(&snapshot.ledger, snapshot.revision.as_ref())
                .await;
        }
        info!(target = "balance", user_id = %user_id, grant = self.welcome.amount, "registered new player");

        let welcome = format!(
            "Welcome! 🎉\nYou will receive **{}** currency as starting balance in a few minutes. (This is an automated message. Please do not respond)",
            format_amount(self.welcome.amount)
        );
        if let Err(e) = self.notifier.notify(user_id, &welcome).await {
            debug!(target = "balance", user_id = %user_id, error = %e, "welcome message not delivered");
        }

        let service = self.clone();
        let grant = self.welcome;
        Some(tokio::spawn(async move {
            tokio::time::sleep(grant.delay).await;
            let balance = service.update_balance(user_id, grant.amount).await;
            info!(target = "balance", user_id = %user_id, balance, "welcome grant applied");
            balance
        }))
    }

    /// Adds `delta` (clamping at zero), writes the whole ledger back and
    /// returns the new balance.
    pub async fn update_balance(&self, user_id: UserId, delta: i64) -> i64 {
        let _gate = self.enter().await;
        let mut snapshot = self.snapshot().await;
        let balance = snapshot.ledger.apply_delta(user_id, delta);
        self.commit(&snapshot.ledger, snapshot.revision.as_ref())
            .await;
        debug!(target = "balance", user_id = %user_id, delta, balance, "balance updated");
        balance
    }

    /// Takes `amount` from the player when `0 < amount <= balance`, checking
    /// and writing in one cycle. Returns the remaining balance. A first-contact
    /// player is registered and rejected with a zero balance.
    pub async fn try_debit(&self, user_id: UserId, amount: i64) -> Result<i64, WagerError> {
        {
            let _gate = self.enter().await;
            let mut snapshot = self.snapshot().await;
            if let Some(balance) = snapshot.ledger.balance(user_id) {
                validate_wager(amount, balance)?;
                let remaining = snapshot.ledger.apply_delta(user_id, -amount);
                self.commit(&snapshot.ledger, snapshot.revision.as_ref())
                    .await;
                debug!(target = "balance", user_id = %user_id, amount, remaining, "balance debited");
                return Ok(remaining);
            }
        }
        if self.ensure_new_player(user_id).await.is_none() {
            debug!(target = "balance", user_id = %user_id, "player registered concurrently");
        }
        validate_wager(amount, 0)?;
        Ok(0)
    }

    async fn enter(&self) -> Option<MutexGuard<'_, ()>> {
        match self.policy {
            ConsistencyPolicy::Serialized => Some(self.gate.lock().await),
            ConsistencyPolicy::Unsynchronized => None,
        }
    }

    async fn snapshot(&self) -> LedgerSnapshot {
        match self.store.read().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(target = "balance", error = %e, "ledger unreadable, treating as empty");
                LedgerSnapshot::default()
            }
        }
    }

    async fn commit(&self, ledger: &Ledger, revision: Option<&RevisionToken>) {
        match self.store.write(ledger, revision).await {
            Ok(status) if status.is_success() => {
                debug!(target = "balance", %status, entries = ledger.len(), "ledger written")
            }
            Ok(status) => {
                warn!(target = "balance", %status, revision = ?revision.map(RevisionToken::as_str), "ledger write rejected")
            }
            Err(e) => warn!(target = "balance", error = %e, "ledger write failed"),
        }
    }
}
