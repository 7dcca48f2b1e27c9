//! Storage for the balances document.
//!
//! The whole document is fetched and replaced on every operation; there is no
//! partial update and no caching between calls. `LedgerStore` is the seam
//! between the balance service and wherever the document lives.

pub mod document;
pub mod github;
pub mod memory;

pub use document::{Ledger, account_key};
pub use github::GithubLedgerStore;
pub use memory::MemoryLedgerStore;

use crate::error::LedgerError;
use async_trait::async_trait;
use std::fmt;

/// Opaque version identifier handed out by the store on read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RevisionToken(String);

impl RevisionToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Result of a read: the document plus the revision it was read at.
/// `revision` is `None` when the host reported a failure and the ledger is empty.
#[derive(Debug, Clone, Default)]
pub struct LedgerSnapshot {
    pub ledger: Ledger,
    pub revision: Option<RevisionToken>,
}

/// HTTP-style status returned by a write. Callers only log it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteStatus(pub u16);

impl WriteStatus {
    pub const OK: WriteStatus = WriteStatus(200);
    pub const CONFLICT: WriteStatus = WriteStatus(409);

    pub fn is_success(self) -> bool {
        (200..300).contains(&self.0)
    }
}

impl fmt::Display for WriteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Fetches the current document. A host-reported failure yields an empty
    /// snapshot without a revision, not an error.
    async fn read(&self) -> Result<LedgerSnapshot, LedgerError>;

    /// Replaces the document at `revision`. No retry.
    async fn write(
        &self,
        ledger: &Ledger,
        revision: Option<&RevisionToken>,
    ) -> Result<WriteStatus, LedgerError>;
}
