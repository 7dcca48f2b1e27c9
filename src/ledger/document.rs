//! The balances document: stringified user id -> non-negative integer balance.

use crate::error::LedgerError;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use serenity::model::id::UserId;
use std::collections::BTreeMap;

/// Key under which a user's balance is stored.
pub fn account_key(user_id: UserId) -> String {
    user_id.get().to_string()
}

/// In-memory form of the whole ledger document.
///
/// Every value is non-negative. A missing key means the player has never been
/// seen, which is not the same thing as a zero balance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    balances: BTreeMap<String, i64>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a stored document. Accepts the normal object form and the legacy
    /// array form, which is re-keyed by index.
    pub fn from_json_str(raw: &str) -> Result<Self, LedgerError> {
        let entries: Vec<(String, Value)> = match serde_json::from_str::<Value>(raw)? {
            Value::Object(map) => map.into_iter().collect(),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
            Value::Null => return Err(LedgerError::Shape("null")),
            Value::Bool(_) => return Err(LedgerError::Shape("a boolean")),
            Value::Number(_) => return Err(LedgerError::Shape("a number")),
            Value::String(_) => return Err(LedgerError::Shape("a string")),
        };

        let mut balances = BTreeMap::new();
        for (key, value) in entries {
            match value.as_i64() {
                Some(v) => {
                    balances.insert(key, v.max(0));
                }
                None => {
                    tracing::warn!(target = "ledger", key = %key, value = %value, "dropping non-integer balance");
                }
            }
        }
        Ok(Self { balances })
    }

    /// Serialises with four-space indentation, keys sorted.
    pub fn to_json_pretty(&self) -> Result<String, LedgerError> {
        let mut out = Vec::new();
        let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
        self.balances.serialize(&mut ser)?;
        Ok(String::from_utf8(out)?)
    }

    pub fn balance(&self, user_id: UserId) -> Option<i64> {
        self.balances.get(&account_key(user_id)).copied()
    }

    pub fn contains(&self, user_id: UserId) -> bool {
        self.balances.contains_key(&account_key(user_id))
    }

    /// Creates a zero entry for an unknown player. Returns true if one was created.
    pub fn insert_if_absent(&mut self, user_id: UserId) -> bool {
        let key = account_key(user_id);
        if self.balances.contains_key(&key) {
            return false;
        }
        self.balances.insert(key, 0);
        true
    }

    /// Adds `delta` to the user's balance (creating the entry at zero first) and
    /// clamps the result at zero. Returns the new balance.
    pub fn apply_delta(&mut self, user_id: UserId, delta: i64) -> i64 {
        let entry = self.balances.entry(account_key(user_id)).or_insert(0);
        *entry = entry.saturating_add(delta).max(0);
        *entry
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.balances.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
