//! Error types for Relay.

pub mod unified;

pub use unified::ErrorCategory;

use thiserror::Error;

/// Primary error type for all Relay operations.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("key not found: {0}")]
    NotFound(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Backend error (status {status}): {body}")]
    BackendStatus { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Deadline exceeded after {0}ms")]
    DeadlineExceeded(u64),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl RelayError {
    /// Create a backend error from any message.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// Create a validation error from any message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound(_) => ErrorCategory::NotFound,
            Self::Backend(_)
            | Self::BackendStatus { .. }
            | Self::Network(_) => ErrorCategory::Backend,
            Self::Cancelled => ErrorCategory::Cancelled,
            Self::DeadlineExceeded(_) => ErrorCategory::DeadlineExceeded,
            Self::Validation(_) => ErrorCategory::Validation,
            Self::Configuration(_) | Self::Yaml(_) => ErrorCategory::Configuration,
            Self::Serialization(_) => ErrorCategory::Serialization,
            Self::Io(_) => ErrorCategory::Unknown,
        }
    }

    /// Whether this error came from the model backend rather than from relay itself.
    pub fn is_backend_failure(&self) -> bool {
        self.category() == ErrorCategory::Backend
    }

    /// Whether the caller aborted the request (cancel or deadline).
    pub fn is_aborted(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Cancelled | ErrorCategory::DeadlineExceeded
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, RelayError>;
