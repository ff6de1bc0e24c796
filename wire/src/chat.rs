//! DTOs shared by the chat endpoints and the websocket relay.

use serde::{Deserialize, Serialize};

/// The authenticated (or guest) visitor as seen by the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub id: String,
    pub name: String,
    /// Assigned presence color (hex).
    pub color: String,
    /// `true` when the session was created without an identity token.
    #[serde(default)]
    pub guest: bool,
}

/// A single chat message, as persisted and as broadcast.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub author: String,
    /// Author presence color (hex).
    pub color: String,
    pub body: String,
    /// Milliseconds since the epoch.
    pub sent_at: i64,
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;
