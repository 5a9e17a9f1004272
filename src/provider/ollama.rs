//! Ollama local backend, spoken to through its OpenAI-compatible
//! Chat Completions endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::RelayError;
use crate::types::ChatTurn;

use super::http::{json_headers, shared_client, status_to_error};
use super::ChatBackend;

/// Default OpenAI-compatible root of a local Ollama install.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";

pub struct OllamaBackend {
    model: String,
    base_url: String,
}

impl OllamaBackend {
    /// `base_url` is the OpenAI-compatible root, e.g. `http://localhost:11434/v1`.
    pub fn new(model: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            model: model.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_request_body(&self, turns: &[ChatTurn]) -> serde_json::Value {
        let messages = turns
            .iter()
            .map(|t| serde_json::json!({ "role": t.role(), "content": t.content() }))
            .collect::<Vec<_>>();

        serde_json::json!({
            "model": self.model,
            "messages": messages,
            "stream": false,
        })
    }
}

#[async_trait]
impl ChatBackend for OllamaBackend {
    fn backend_name(&self) -> &str {
        "ollama"
    }

    fn model_id(&self) -> &str {
        &self.model
    }

    async fn complete(&self, turns: &[ChatTurn]) -> Result<String, RelayError> {
        let body = self.build_request_body(turns);
        let url = format!("{}/chat/completions", self.base_url);

        debug!(model = %self.model, turns = turns.len(), "Ollama complete");

        let resp = shared_client()
            .post(&url)
            .headers(json_headers())
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status.as_u16(), &body_text));
        }

        let data: ChatCompletionResponse = resp.json().await?;
        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| RelayError::backend("no choices"))?;

        match choice.message.content {
            Some(content) if !content.is_empty() => Ok(content),
            _ => Err(RelayError::backend("empty content")),
        }
    }
}

// Chat Completions response types (internal)

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionMessage,
}

#[derive(Deserialize)]
struct ChatCompletionMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let backend = OllamaBackend::new("qwen2.5", "http://localhost:11434/v1/");
        assert_eq!(backend.base_url(), "http://localhost:11434/v1");
    }

    #[test]
    fn request_body_replays_turns_in_order() {
        let backend = OllamaBackend::new("qwen2.5", DEFAULT_BASE_URL);
        let body = backend.build_request_body(&[
            ChatTurn::user("hi"),
            ChatTurn::assistant("hello"),
            ChatTurn::user("how are you"),
        ]);

        assert_eq!(
            body,
            serde_json::json!({
                "model": "qwen2.5",
                "messages": [
                    {"role": "user", "content": "hi"},
                    {"role": "assistant", "content": "hello"},
                    {"role": "user", "content": "how are you"},
                ],
                "stream": false,
            })
        );
    }
}
