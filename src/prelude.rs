//! Convenience re-exports for common use.

pub use crate::config::RelayConfig;
pub use crate::engine::{ChatEngine, EngineMode, EngineSettings, MockResponder};
pub use crate::error::{RelayError, Result};
pub use crate::history::{HistoryStore, MemoryHistoryStore};
pub use crate::provider::{ChatBackend, OllamaBackend};
pub use crate::types::{ChatRequest, ChatResponse, ChatTurn, Role};
