//! HTTP surface: `POST /chat` and `GET /ping`.

pub mod routes;

pub use routes::{create_router, AppState};

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::engine::ChatEngine;
use crate::error::Result;

/// Build the full application: routes plus CORS and request tracing layers.
pub fn app(engine: Arc<ChatEngine>) -> Router {
    create_router(AppState { engine })
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: &str, engine: Arc<ChatEngine>) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(
        addr = %listener.local_addr()?,
        mode = %engine.mode(),
        "relay listening"
    );

    axum::serve(listener, app(engine)).await?;
    Ok(())
}
