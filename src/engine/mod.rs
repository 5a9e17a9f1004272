//! Chat engine: one conversation turn against a live backend or the mock
//! responder.
//!
//! The engine decides once, at construction, whether a live backend is
//! usable. If the startup probe fails it stays in mock mode for its whole
//! lifetime; there is no re-probing.

pub mod mock;

pub use mock::MockResponder;

use std::sync::Arc;
use std::time::Duration;

use bon::Builder;
use strum::{Display, EnumString};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::{RelayConfig, ServerConfig};
use crate::error::{RelayError, Result};
use crate::history::{HistoryStore, MemoryHistoryStore};
use crate::provider::{ChatBackend, OllamaBackend};
use crate::types::ChatTurn;
use crate::util::timeout::{abortable, with_timeout};

/// Message sent as the startup liveness probe.
pub const PROBE_MESSAGE: &str = "你好";

/// Which path replies are produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum EngineMode {
    Live,
    Mock,
}

/// Tunables for request handling.
#[derive(Debug, Clone, Builder)]
pub struct EngineSettings {
    /// Deadline for one backend call while serving a turn.
    pub request_timeout: Option<Duration>,
    /// Deadline for the startup liveness probe.
    #[builder(default = Duration::from_secs(10))]
    pub probe_timeout: Duration,
    /// Expiry passed to the history store on every write.
    pub history_ttl: Option<Duration>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<&ServerConfig> for EngineSettings {
    fn from(server: &ServerConfig) -> Self {
        Self {
            request_timeout: server.request_timeout(),
            probe_timeout: server.probe_timeout(),
            history_ttl: server.history_ttl(),
        }
    }
}

enum Backend {
    Live(Arc<dyn ChatBackend>),
    Mock(MockResponder),
}

/// Orchestrates chat turns and owns access to conversation history.
pub struct ChatEngine {
    backend: Backend,
    store: Arc<dyn HistoryStore>,
    settings: EngineSettings,
}

impl ChatEngine {
    /// An engine that always answers from the mock responder.
    pub fn mock(store: Arc<dyn HistoryStore>) -> Self {
        Self {
            backend: Backend::Mock(MockResponder::new()),
            store,
            settings: EngineSettings::default(),
        }
    }

    /// An engine bound to `backend` without probing it first.
    pub fn live(backend: Arc<dyn ChatBackend>, store: Arc<dyn HistoryStore>) -> Self {
        Self {
            backend: Backend::Live(backend),
            store,
            settings: EngineSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: EngineSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Probe `backend` with a one-turn greeting and bind to it if it answers.
    ///
    /// Any failure (unreachable, error status, no choices, empty content, or
    /// probe timeout) yields a mock-mode engine. This never fails.
    pub async fn probe(
        backend: Arc<dyn ChatBackend>,
        store: Arc<dyn HistoryStore>,
        settings: EngineSettings,
    ) -> Self {
        let probe = [ChatTurn::user(PROBE_MESSAGE)];
        let outcome = with_timeout(settings.probe_timeout, backend.complete(&probe)).await;
        match outcome {
            Ok(_) => {
                info!(
                    backend = backend.backend_name(),
                    model = backend.model_id(),
                    "backend available, using live mode"
                );
                Self::live(backend, store).with_settings(settings)
            }
            Err(e) => {
                warn!(
                    backend = backend.backend_name(),
                    error = %e,
                    "backend not available, using mock mode"
                );
                Self::mock(store).with_settings(settings)
            }
        }
    }

    /// Build an engine from configuration, with a fresh in-memory history
    /// store. Configs without a backend go straight to mock mode.
    pub async fn from_config(config: &RelayConfig) -> Self {
        let store: Arc<dyn HistoryStore> = Arc::new(MemoryHistoryStore::new());
        let settings = EngineSettings::from(&config.server);

        if !config.has_backend() {
            warn!("no model backend configured, using mock mode");
            return Self::mock(store).with_settings(settings);
        }

        let backend = Arc::new(OllamaBackend::new(&config.model, &config.base_url));
        Self::probe(backend, store, settings).await
    }

    pub fn mode(&self) -> EngineMode {
        match self.backend {
            Backend::Live(_) => EngineMode::Live,
            Backend::Mock(_) => EngineMode::Mock,
        }
    }

    pub fn store(&self) -> &Arc<dyn HistoryStore> {
        &self.store
    }

    /// Run one chat turn for `user_id` and return the reply text.
    pub async fn chat(&self, user_id: &str, message: &str) -> Result<String> {
        self.chat_with_cancel(user_id, message, &CancellationToken::new())
            .await
    }

    /// Run one chat turn, aborting the backend call if `cancel` fires or the
    /// request deadline passes. An aborted or failed turn writes nothing.
    pub async fn chat_with_cancel(
        &self,
        user_id: &str,
        message: &str,
        cancel: &CancellationToken,
    ) -> Result<String> {
        let backend = match &self.backend {
            Backend::Mock(responder) => return Ok(responder.respond(message)),
            Backend::Live(backend) => backend,
        };

        let mut turns = match self.store.get(user_id) {
            Ok(turns) => turns,
            // First message from this user.
            Err(RelayError::NotFound(_)) => Vec::new(),
            Err(e) => return Err(e),
        };
        turns.push(ChatTurn::user(message));

        debug!(user = user_id, turns = turns.len(), "sending turn to backend");

        let reply = abortable(
            self.settings.request_timeout,
            cancel,
            backend.complete(&turns),
        )
        .await?;

        turns.push(ChatTurn::assistant(reply.clone()));
        self.store.set(user_id, turns, self.settings.history_ttl)?;

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_builder_defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.request_timeout, None);
        assert_eq!(settings.probe_timeout, Duration::from_secs(10));
        assert_eq!(settings.history_ttl, None);
    }

    #[test]
    fn settings_from_server_config() {
        let settings = EngineSettings::from(&ServerConfig::default());
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(60)));
    }

    #[test]
    fn mode_round_trips_through_strings() {
        assert_eq!(EngineMode::Mock.to_string(), "mock");
        assert_eq!("live".parse::<EngineMode>().unwrap(), EngineMode::Live);
    }

    #[tokio::test]
    async fn config_without_backend_is_mock() {
        let engine = ChatEngine::from_config(&RelayConfig::default()).await;
        assert_eq!(engine.mode(), EngineMode::Mock);
    }
}
