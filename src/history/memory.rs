//! In-process history store backed by a sharded concurrent map.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;
use tracing::debug;

use crate::error::{RelayError, Result};
use crate::types::ChatTurn;

use super::HistoryStore;

/// History store held in memory for the lifetime of the process.
///
/// Contention is per shard rather than global, so requests for different
/// users rarely block each other.
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    entries: DashMap<String, HistoryEntry>,
    /// Set once any entry has been written with an expiry.
    expiring: AtomicBool,
}

#[derive(Debug)]
struct HistoryEntry {
    turns: Vec<ChatTurn>,
    expires_at: Option<Instant>,
}

impl HistoryEntry {
    fn is_expired(&self) -> bool {
        self.expires_at
            .map(|deadline| Instant::now() >= deadline)
            .unwrap_or(false)
    }
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn evict_expired(&self) {
        let before = self.entries.len();
        self.entries.retain(|_, e| !e.is_expired());
        let evicted = before.saturating_sub(self.entries.len());
        if evicted > 0 {
            debug!(evicted, "swept expired histories");
        }
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn get(&self, key: &str) -> Result<Vec<ChatTurn>> {
        if key.is_empty() {
            return Ok(Vec::new());
        }

        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => return Ok(entry.turns.clone()),
            Some(_) => true,
            None => false,
        };

        // The read guard above is released; safe to take the shard write lock.
        if expired && self.entries.remove_if(key, |_, e| e.is_expired()).is_some() {
            debug!(key, "evicted expired history");
        }

        Err(RelayError::NotFound(key.to_string()))
    }

    fn set(&self, key: &str, turns: Vec<ChatTurn>, expiry: Option<Duration>) -> Result<()> {
        if key.is_empty() {
            return Ok(());
        }

        // A deadline past the clock's range never expires.
        let expires_at = expiry.and_then(|ttl| Instant::now().checked_add(ttl));
        if expires_at.is_some() {
            self.expiring.store(true, Ordering::Relaxed);
        }
        if self.expiring.load(Ordering::Relaxed) {
            self.evict_expired();
        }

        self.entries
            .insert(key.to_string(), HistoryEntry { turns, expires_at });
        Ok(())
    }

    fn remove(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
