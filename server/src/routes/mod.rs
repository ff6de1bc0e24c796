//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the API and websocket endpoints and serves the built
//! client bundle as static files at `/`. The site is client-rendered; the
//! server's only rendering concern is handing out `index.html` and assets.

pub mod auth;
pub mod chat;
pub mod ws;

use std::path::PathBuf;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes shared by the browser client and diagnostic tooling.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/healthz", get(healthz))
        .route("/api/auth/guest", post(auth::guest_sign_in))
        .route("/api/auth/token", post(auth::token_sign_in))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/ws-ticket", post(auth::ws_ticket))
        .route("/api/chat/history", get(chat::history))
        .route("/api/ws", get(ws::handle_ws))
        .layer(cors)
        .with_state(state)
}

/// Resolve the directory holding the built client bundle.
fn site_dir() -> PathBuf {
    std::env::var("SITE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../client/dist"))
}

/// Full application router: API + static client bundle.
///
/// Unknown paths fall back to `index.html` so client-side routes survive a
/// hard refresh.
pub fn app(state: AppState) -> Router {
    let root = site_dir();
    let site = ServeDir::new(&root)
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new(root.join("index.html")));

    api_routes(state)
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Health probe: reports whether the database round-trips.
async fn healthz(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    match crate::db::ping(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "status": "ok", "database": "ok" })),
        ),
        Err(e) => {
            tracing::error!(error = %e, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "status": "degraded", "database": "unreachable" })),
            )
        }
    }
}
