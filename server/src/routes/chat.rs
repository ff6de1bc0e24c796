//! Chat history endpoint.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use wire::ChatMessage;

use crate::services;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

/// `GET /api/chat/history?limit=N` — most recent messages, oldest first.
pub async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<ChatMessage>>, StatusCode> {
    let limit = services::chat::clamp_history_limit(query.limit);
    match services::chat::history(&state.pool, limit).await {
        Ok(messages) => Ok(Json(messages)),
        Err(e) => {
            tracing::error!(error = %e, "chat history query failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
