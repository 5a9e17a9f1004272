//! Error classification shared by the engine and the HTTP layer.

use serde::{Deserialize, Serialize};

/// Broad error category for routing recovery and response logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    NotFound,
    Backend,
    Cancelled,
    DeadlineExceeded,
    Validation,
    Configuration,
    Serialization,
    Unknown,
}

impl ErrorCategory {
    /// HTTP status code the transport layer reports for this category.
    pub fn status_code(self) -> u16 {
        match self {
            Self::Validation | Self::Serialization => 400,
            Self::NotFound => 404,
            Self::Cancelled | Self::DeadlineExceeded => 504,
            Self::Backend | Self::Configuration | Self::Unknown => 500,
        }
    }
}
