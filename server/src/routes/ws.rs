//! WebSocket handler — chat envelope relay.
//!
//! DESIGN
//! ======
//! On upgrade, generates a client ID and enters a `select!` loop:
//! - Incoming client envelopes → parse + dispatch by event name
//! - Broadcast envelopes from peers → forward to client
//!
//! Handler logic is pure where possible — validation returns an `Outcome`
//! and the dispatch layer owns persistence, reply, and broadcast.
//!
//! LIFECYCLE
//! =========
//! 1. Upgrade (ticket-authenticated) → send `session:connected`
//! 2. Presence broadcast to peers (`chat:presence`)
//! 3. Client sends envelopes → dispatch → apply outcome
//! 4. Close → remove from hub → presence broadcast → cleanup

use std::collections::HashMap;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use wire::{Envelope, Status};

use crate::services;
use crate::services::session::SessionVisitor;
use crate::state::AppState;

// =============================================================================
// OUTCOME
// =============================================================================

/// Result of dispatching one incoming envelope. The dispatch loop applies it;
/// validation never touches the socket directly.
enum Outcome {
    /// Send to the originating client only.
    Reply(Envelope),
    /// Reply to the sender (with correlation id) and fan a copy out to peers.
    ReplyAndBroadcast { reply: Envelope, broadcast: Envelope },
}

/// Validate a `chat:message` request and extract the normalized body.
///
/// Returns the error envelope to send back when the request is malformed.
fn message_body(envelope: &Envelope) -> Result<String, Envelope> {
    if envelope.status != Status::Request {
        return Err(
            Envelope::error("chat:message", "only request envelopes are accepted")
                .replying_to(&envelope.id),
        );
    }
    envelope
        .data
        .get("body")
        .and_then(serde_json::Value::as_str)
        .and_then(services::chat::normalize_body)
        .ok_or_else(|| {
            Envelope::error("chat:message", "message body is empty or too long")
                .replying_to(&envelope.id)
        })
}

/// Presence broadcast payload.
fn presence_envelope(viewers: usize) -> Envelope {
    Envelope::done("chat:presence", serde_json::json!({ "viewers": viewers }))
        .at(services::chat::now_ms())
}

// =============================================================================
// UPGRADE
// =============================================================================

pub async fn handle_ws(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    ws: WebSocketUpgrade,
) -> Response {
    let Some(ticket) = params.get("ticket") else {
        return (StatusCode::UNAUTHORIZED, "ticket required").into_response();
    };

    let visitor_id = match services::session::consume_ws_ticket(&state.pool, ticket).await {
        Ok(Some(id)) => id,
        Ok(None) => return (StatusCode::UNAUTHORIZED, "invalid or expired ticket").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "ws ticket validation failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "ticket validation error").into_response();
        }
    };

    let visitor = match services::session::visitor_by_id(&state.pool, visitor_id).await {
        Ok(Some(v)) => v,
        Ok(None) => return (StatusCode::UNAUTHORIZED, "unknown visitor").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "visitor lookup failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "visitor lookup error").into_response();
        }
    };

    ws.on_upgrade(move |socket| run_ws(socket, state, visitor))
}

// =============================================================================
// CONNECTION
// =============================================================================

async fn run_ws(mut socket: WebSocket, state: AppState, visitor: SessionVisitor) {
    let client_id = Uuid::new_v4();

    // Per-connection channel for receiving broadcast envelopes from peers.
    let (client_tx, mut client_rx) = mpsc::channel::<Envelope>(256);

    let viewers = {
        let mut hub = state.chat.write().await;
        hub.register(client_id, client_tx)
    };

    let welcome = Envelope::done(
        "session:connected",
        serde_json::json!({
            "client_id": client_id.to_string(),
            "viewer": visitor.to_viewer(),
            "viewers": viewers,
        }),
    )
    .at(services::chat::now_ms());
    if send_envelope(&mut socket, &welcome).await.is_err() {
        state.chat.write().await.remove(client_id);
        return;
    }

    info!(%client_id, visitor_id = %visitor.id, "ws: client connected");

    // Everyone else learns the new viewer count.
    {
        let hub = state.chat.read().await;
        hub.broadcast(&presence_envelope(viewers), Some(client_id));
    }

    loop {
        tokio::select! {
            msg = socket.recv() => {
                let Some(Ok(msg)) = msg else { break };
                match msg {
                    Message::Text(text) => {
                        dispatch(&state, &mut socket, &visitor, client_id, text.as_str()).await;
                    }
                    Message::Close(_) => break,
                    _ => {}
                }
            }
            Some(envelope) = client_rx.recv() => {
                if send_envelope(&mut socket, &envelope).await.is_err() {
                    break;
                }
            }
        }
    }

    let viewers = {
        let mut hub = state.chat.write().await;
        hub.remove(client_id)
    };
    {
        let hub = state.chat.read().await;
        hub.broadcast(&presence_envelope(viewers), None);
    }
    info!(%client_id, "ws: client disconnected");
}

// =============================================================================
// DISPATCH
// =============================================================================

async fn dispatch(
    state: &AppState,
    socket: &mut WebSocket,
    visitor: &SessionVisitor,
    client_id: Uuid,
    text: &str,
) {
    let envelope = match Envelope::decode(text) {
        Ok(env) => env,
        Err(e) => {
            warn!(%client_id, error = %e, "ws: undecodable envelope");
            let reply = Envelope::error("gateway:error", "undecodable envelope");
            let _ = send_envelope(socket, &reply).await;
            return;
        }
    };

    let outcome = match envelope.event.as_str() {
        "chat:message" => handle_chat_message(state, visitor, &envelope).await,
        _ => {
            warn!(%client_id, event = %envelope.event, "ws: unknown event");
            Outcome::Reply(
                Envelope::error(&envelope.event, "unknown event").replying_to(&envelope.id),
            )
        }
    };

    match outcome {
        Outcome::Reply(reply) => {
            let _ = send_envelope(socket, &reply).await;
        }
        Outcome::ReplyAndBroadcast { reply, broadcast } => {
            {
                let hub = state.chat.read().await;
                hub.broadcast(&broadcast, Some(client_id));
            }
            let _ = send_envelope(socket, &reply).await;
        }
    }
}

async fn handle_chat_message(
    state: &AppState,
    visitor: &SessionVisitor,
    envelope: &Envelope,
) -> Outcome {
    let body = match message_body(envelope) {
        Ok(body) => body,
        Err(reply) => return Outcome::Reply(reply),
    };

    match services::chat::store_message(&state.pool, visitor, body).await {
        Ok(message) => {
            let payload = match serde_json::to_value(&message) {
                Ok(value) => value,
                Err(e) => {
                    tracing::error!(error = %e, "chat message serialization failed");
                    return Outcome::Reply(
                        Envelope::error("chat:message", "internal error").replying_to(&envelope.id),
                    );
                }
            };
            let broadcast = Envelope::done("chat:message", payload).at(message.sent_at);
            let reply = broadcast.clone().replying_to(&envelope.id);
            Outcome::ReplyAndBroadcast { reply, broadcast }
        }
        Err(e) => {
            tracing::error!(error = %e, "chat message persistence failed");
            Outcome::Reply(
                Envelope::error("chat:message", "message could not be stored")
                    .replying_to(&envelope.id),
            )
        }
    }
}

async fn send_envelope(socket: &mut WebSocket, envelope: &Envelope) -> Result<(), axum::Error> {
    match envelope.encode() {
        Ok(text) => socket.send(Message::Text(text.into())).await,
        Err(e) => {
            tracing::error!(error = %e, "envelope encoding failed");
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "ws_test.rs"]
mod ws_test;
