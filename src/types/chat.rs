//! Request and response bodies for the chat endpoint.

use serde::{Deserialize, Serialize};

/// Inbound chat request.
///
/// `session_id` and `mode` are accepted for front-end compatibility; only
/// `user` and `message` reach the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default)]
    pub user: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl ChatRequest {
    pub fn new(user: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            session_id: None,
            user: user.into(),
            message: message.into(),
            mode: None,
        }
    }
}

/// Successful chat reply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub reply: String,
    /// Reply time in Unix milliseconds.
    pub timestamp: i64,
}

impl ChatResponse {
    /// Build a reply stamped with the current time.
    pub fn now(session_id: Option<String>, reply: String) -> Self {
        Self {
            session_id,
            reply,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Body returned for any failed request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
}
