//! Per-user conversation history storage.
//!
//! A store maps a user identifier to the ordered turns of that user's
//! conversation. The empty identifier means "no session": reads return an
//! empty history and writes are dropped.

pub mod memory;

pub use memory::MemoryHistoryStore;

use std::time::Duration;

use crate::error::Result;
use crate::types::ChatTurn;

/// Key-value store of conversation histories.
///
/// Implementations must be safe to call concurrently without external
/// locking. There is no atomicity across a `get` followed by a `set`: two
/// writers racing on the same key both succeed and the last one wins.
pub trait HistoryStore: Send + Sync {
    /// Fetch a copy of the history stored under `key`.
    ///
    /// Fails with [`RelayError::NotFound`](crate::error::RelayError::NotFound)
    /// when nothing (or only an expired entry) is stored, except for the empty
    /// key, which always yields an empty history.
    fn get(&self, key: &str) -> Result<Vec<ChatTurn>>;

    /// Replace the history stored under `key`.
    ///
    /// `expiry` of `None` keeps the entry for the lifetime of the store.
    /// Writes to the empty key succeed without storing anything.
    fn set(&self, key: &str, turns: Vec<ChatTurn>, expiry: Option<Duration>) -> Result<()>;

    /// Drop the history stored under `key`, returning whether one existed.
    fn remove(&self, key: &str) -> bool;

    /// Number of stored histories, including ones that expired but have not
    /// been read since.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
