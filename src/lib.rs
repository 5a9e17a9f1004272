//! Relay — chat façade for a local language model
//!
//! Forwards chat messages to an OpenAI-compatible model runtime (typically
//! Ollama), keeps a per-user conversation history in memory, and falls back
//! to canned replies when the model cannot be reached at startup.
//!
//! # Quick Start
//!
//! ```no_run
//! use relay::prelude::*;
//!
//! # async fn example() -> relay::error::Result<()> {
//! let config = RelayConfig::load_or_default(relay::config::DEFAULT_CONFIG_PATH);
//! let engine = ChatEngine::from_config(&config).await;
//! let reply = engine.chat("alice", "Hello!").await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod prelude;
pub mod provider;
pub mod types;
pub mod util;

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "cli")]
pub mod cli;
