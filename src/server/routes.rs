use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use tracing::{warn, Instrument};
use uuid::Uuid;

use crate::engine::ChatEngine;
use crate::error::RelayError;
use crate::history::HistoryStore;
use crate::types::{ChatRequest, ChatResponse, ErrorBody};

/// Application state shared across routes
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ChatEngine>,
}

/// Create router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/ping", get(ping))
        .with_state(state)
}

/// POST /chat - Run one chat turn
async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, RelayError> {
    let Json(request) = payload.map_err(|e| RelayError::validation(e.body_text()))?;

    let span = tracing::info_span!(
        "chat",
        request_id = %Uuid::new_v4(),
        user = %request.user,
        session_id = request.session_id.as_deref().unwrap_or(""),
    );

    async move {
        let reply = state
            .engine
            .chat(&request.user, &request.message)
            .await
            .map_err(|e| {
                warn!(error = %e, "chat turn failed");
                e
            })?;

        Ok::<_, RelayError>(Json(ChatResponse::now(request.session_id, reply)))
    }
    .instrument(span)
    .await
}

/// GET /ping - Health check
async fn ping(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "pong",
        "mode": state.engine.mode().to_string(),
        "histories": state.engine.store().len(),
    }))
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.category().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}
