//! Command-line arguments for the relay server.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{RelayConfig, DEFAULT_CONFIG_PATH};

/// Relay chat server
#[derive(Parser, Debug)]
#[command(name = "relay", version, about = "Relay — chat façade for a local language model")]
pub struct Cli {
    /// Path to the YAML (or JSON) config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, env = "RELAY_CONFIG")]
    pub config: PathBuf,

    /// Address to listen on (overrides config and RELAY_BIND)
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Skip the backend probe and answer with canned replies only
    #[arg(long)]
    pub mock: bool,

    /// Log filter used when RUST_LOG is unset (e.g. info, relay=debug)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Resolve the effective config: file, then environment, then flags.
    pub fn resolve_config(&self) -> RelayConfig {
        let mut config = RelayConfig::load_or_default(&self.config);
        config.apply_env();
        self.apply_flags(&mut config);
        config
    }

    fn apply_flags(&self, config: &mut RelayConfig) {
        if let Some(ref bind) = self.bind {
            config.server.bind = bind.clone();
        }
        if self.mock {
            config.model.clear();
        }
    }
}
