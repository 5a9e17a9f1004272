//! Configuration (layered: CLI > env > config file > defaults).
//!
//! The config file is YAML, with JSON accepted as a fallback:
//!
//! ```yaml
//! model: qwen2.5:7b
//! baseURL: http://localhost:11434/v1
//! server:
//!   bind: 0.0.0.0:9090
//!   request_timeout_secs: 60
//! ```
//!
//! A file that is missing or unparsable is not fatal; the relay starts in
//! mock mode instead.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{RelayError, Result};

/// Where the relay looks for its config file unless told otherwise.
pub const DEFAULT_CONFIG_PATH: &str = "conf/openai.yaml";

pub const DEFAULT_BIND: &str = "0.0.0.0:9090";

/// Top-level relay configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Model identifier passed to the backend.
    #[serde(default)]
    pub model: String,
    /// OpenAI-compatible root URL of the backend.
    #[serde(default, rename = "baseURL", alias = "base_url")]
    pub base_url: String,
    #[serde(default)]
    pub server: ServerConfig,
}

/// HTTP server and request-handling settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    /// Upper bound on one backend call while serving a request.
    pub request_timeout_secs: Option<u64>,
    /// Upper bound on the startup liveness probe.
    pub probe_timeout_secs: u64,
    /// History lifetime; unset keeps histories for the life of the process.
    pub history_ttl_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            request_timeout_secs: Some(60),
            probe_timeout_secs: 10,
            history_ttl_secs: None,
        }
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    pub fn history_ttl(&self) -> Option<Duration> {
        self.history_ttl_secs.map(Duration::from_secs)
    }
}

impl RelayConfig {
    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| {
            RelayError::Configuration(format!(
                "failed to read config file {}: {e}",
                path.display()
            ))
        })?;
        Self::parse(&data)
    }

    /// Parse config text as YAML, falling back to JSON.
    pub fn parse(data: &str) -> Result<Self> {
        match serde_yaml::from_str(data) {
            Ok(config) => Ok(config),
            Err(yaml_err) => serde_json::from_str(data).map_err(|json_err| {
                RelayError::Configuration(format!(
                    "failed to parse config file: YAML: {yaml_err}, JSON: {json_err}"
                ))
            }),
        }
    }

    /// Load a config file, degrading to defaults (and so to mock mode) on
    /// any failure.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, path = %path.as_ref().display(), "failed to load config, using mock mode");
                Self::default()
            }
        }
    }

    /// Apply `RELAY_*` environment overrides (loading `.env` if present).
    pub fn apply_env(&mut self) {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup, using the `RELAY_*` names.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(model) = lookup("RELAY_MODEL") {
            self.model = model;
        }
        if let Some(url) = lookup("RELAY_BASE_URL") {
            self.base_url = url;
        }
        if let Some(bind) = lookup("RELAY_BIND") {
            self.server.bind = bind;
        }
    }

    /// Whether enough is configured to try a live backend.
    pub fn has_backend(&self) -> bool {
        !self.model.trim().is_empty() && !self.base_url.trim().is_empty()
    }
}
