//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the database pool, the (optional) identity provider handle, and the
//! live chat hub. Process-wide resources are constructed once in `main` and
//! passed here explicitly — nothing in the server reaches for an ambient
//! singleton.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

use sqlx::PgPool;
use wire::Envelope;

use crate::services::identity::IdentityVerifier;

// =============================================================================
// CHAT HUB
// =============================================================================

/// Live chat connections: `client_id` -> sender for outgoing envelopes.
///
/// Kept in memory only; message history lives in Postgres. Slow clients are
/// skipped rather than awaited — a full per-client buffer drops the envelope.
#[derive(Default)]
pub struct ChatHub {
    clients: HashMap<Uuid, mpsc::Sender<Envelope>>,
}

impl ChatHub {
    /// Register a connected client. Returns the new viewer count.
    pub fn register(&mut self, client_id: Uuid, tx: mpsc::Sender<Envelope>) -> usize {
        self.clients.insert(client_id, tx);
        self.clients.len()
    }

    /// Remove a client on disconnect. Returns the remaining viewer count.
    pub fn remove(&mut self, client_id: Uuid) -> usize {
        self.clients.remove(&client_id);
        self.clients.len()
    }

    #[must_use]
    pub fn viewer_count(&self) -> usize {
        self.clients.len()
    }

    /// Fan an envelope out to every connected client, optionally excluding
    /// one. Returns how many clients accepted it.
    pub fn broadcast(&self, envelope: &Envelope, exclude: Option<Uuid>) -> usize {
        let mut delivered = 0;
        for (client_id, tx) in &self.clients {
            if Some(*client_id) == exclude {
                continue;
            }
            if tx.try_send(envelope.clone()).is_ok() {
                delivered += 1;
            }
        }
        delivered
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Optional identity provider. `None` if `IDENTITY_*` env vars are not
    /// configured; guest sessions remain available.
    pub identity: Option<Arc<dyn IdentityVerifier>>,
    pub chat: Arc<RwLock<ChatHub>>,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, identity: Option<Arc<dyn IdentityVerifier>>) -> Self {
        Self { pool, identity, chat: Arc::new(RwLock::new(ChatHub::default())) }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;
