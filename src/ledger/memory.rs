//! Process-local ledger store. Used for local runs (`LEDGER_BACKEND=memory`)
//! and as the store behind the balance tests.

use super::{Ledger, LedgerSnapshot, LedgerStore, RevisionToken, WriteStatus};
use crate::error::LedgerError;
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// How a write with an out-of-date revision is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionCheck {
    /// Stale writes get 409 and change nothing, like the GitHub contents API.
    Enforce,
    /// Every write replaces the document regardless of revision.
    Ignore,
}

struct State {
    ledger: Ledger,
    version: u64,
}

pub struct MemoryLedgerStore {
    state: Mutex<State>,
    check: RevisionCheck,
}

impl Default for MemoryLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::with_ledger(Ledger::new(), RevisionCheck::Enforce)
    }

    pub fn with_ledger(ledger: Ledger, check: RevisionCheck) -> Self {
        Self {
            state: Mutex::new(State { ledger, version: 0 }),
            check,
        }
    }

    /// Current document, bypassing the store protocol.
    pub fn ledger(&self) -> Ledger {
        self.lock().ledger.clone()
    }

    /// Number of successful writes so far.
    pub fn version(&self) -> u64 {
        self.lock().version
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn token_for(version: u64) -> RevisionToken {
    RevisionToken::new(format!("rev-{version}"))
}

#[async_trait]
impl LedgerStore for MemoryLedgerStore {
    async fn read(&self) -> Result<LedgerSnapshot, LedgerError> {
        let state = self.lock();
        Ok(LedgerSnapshot {
            ledger: state.ledger.clone(),
            revision: Some(token_for(state.version)),
        })
    }

    async fn write(
        &self,
        ledger: &Ledger,
        revision: Option<&RevisionToken>,
    ) -> Result<WriteStatus, LedgerError> {
        let mut state = self.lock();
        if self.check == RevisionCheck::Enforce {
            let current = token_for(state.version);
            // Without a token only the very first write (document creation) is accepted.
            let fresh = match revision {
                Some(rev) => *rev == current,
                None => state.version == 0,
            };
            if !fresh {
                return Ok(WriteStatus::CONFLICT);
            }
        }
        state.ledger = ledger.clone();
        state.version += 1;
        Ok(WriteStatus::OK)
    }
}
