//! Language-model backend trait and implementations.

pub mod http;
pub mod ollama;

pub use ollama::OllamaBackend;

use async_trait::async_trait;

use crate::error::RelayError;
use crate::types::ChatTurn;

/// A live language-model backend.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Backend name (e.g., "ollama").
    fn backend_name(&self) -> &str;

    /// The model ID this backend serves.
    fn model_id(&self) -> &str;

    /// Complete a conversation, oldest turn first, returning the assistant's
    /// reply text.
    ///
    /// Fails with a backend error when the call fails, when the response has
    /// no choices, or when the first choice's content is empty.
    async fn complete(&self, turns: &[ChatTurn]) -> Result<String, RelayError>;
}
