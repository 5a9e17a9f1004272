//! Relay server binary entry point.

use std::sync::Arc;

use clap::Parser;
use relay::cli::Cli;
use relay::engine::ChatEngine;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_target(false)
        .init();

    let config = cli.resolve_config();
    let engine = Arc::new(ChatEngine::from_config(&config).await);

    if let Err(e) = relay::server::serve(&config.server.bind, engine).await {
        tracing::error!(error = %e, "server stopped");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
