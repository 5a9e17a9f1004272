//! Shared test helpers and a scripted backend.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use relay::error::RelayError;
use relay::history::{HistoryStore, MemoryHistoryStore};
use relay::provider::ChatBackend;
use relay::types::ChatTurn;

/// A backend that returns queued results and records every conversation it
/// was asked to complete.
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<String, RelayError>>>,
    calls: Mutex<Vec<Vec<ChatTurn>>>,
    delay: Option<Duration>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    /// Sleep this long inside every call before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue a successful reply.
    pub fn queue_reply(&self, text: &str) {
        self.replies.lock().unwrap().push_back(Ok(text.to_string()));
    }

    /// Queue a failure.
    pub fn queue_error(&self, error: RelayError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    /// Conversations received so far, in call order.
    pub fn calls(&self) -> Vec<Vec<ChatTurn>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    fn backend_name(&self) -> &str {
        "scripted"
    }

    fn model_id(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, turns: &[ChatTurn]) -> Result<String, RelayError> {
        self.calls.lock().unwrap().push(turns.to_vec());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let mut replies = self.replies.lock().unwrap();
        replies
            .pop_front()
            .unwrap_or_else(|| Ok("Scripted response".to_string()))
    }
}

/// A fresh in-memory store behind the trait object the engine expects.
pub fn memory_store() -> Arc<dyn HistoryStore> {
    Arc::new(MemoryHistoryStore::new())
}
