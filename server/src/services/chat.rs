//! Chat persistence and fan-out.
//!
//! Live connection bookkeeping lives on [`crate::state::ChatHub`]; this
//! module owns validation, Postgres persistence, and history loading.

use std::time::{SystemTime, UNIX_EPOCH};

use sqlx::{PgPool, Row};
use uuid::Uuid;

use wire::ChatMessage;

use crate::services::session::SessionVisitor;

pub const MAX_MESSAGE_LEN: usize = 2000;
pub const DEFAULT_HISTORY_LIMIT: i64 = 50;
pub const MAX_HISTORY_LIMIT: i64 = 200;

/// Milliseconds since the epoch.
#[must_use]
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// Normalize and validate a message body. Returns `None` for messages that
/// must be rejected (empty after trimming, or over [`MAX_MESSAGE_LEN`]).
#[must_use]
pub fn normalize_body(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_MESSAGE_LEN {
        return None;
    }
    Some(trimmed.to_owned())
}

/// Clamp a requested history page size into the allowed range.
#[must_use]
pub fn clamp_history_limit(requested: Option<i64>) -> i64 {
    requested
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY_LIMIT)
}

/// Persist a chat message from `visitor`, returning the stored record.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub async fn store_message(
    pool: &PgPool,
    visitor: &SessionVisitor,
    body: String,
) -> Result<ChatMessage, sqlx::Error> {
    let id = Uuid::new_v4();
    let message = ChatMessage {
        id: id.to_string(),
        author: visitor.name.clone(),
        color: visitor.color.clone(),
        body,
        sent_at: now_ms(),
    };

    sqlx::query(
        "INSERT INTO chat_messages (id, visitor_id, author, color, body, sent_at)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(id)
    .bind(visitor.id)
    .bind(&message.author)
    .bind(&message.color)
    .bind(&message.body)
    .bind(message.sent_at)
    .execute(pool)
    .await?;

    Ok(message)
}

/// Load the most recent messages, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn history(pool: &PgPool, limit: i64) -> Result<Vec<ChatMessage>, sqlx::Error> {
    let rows = sqlx::query(
        r"SELECT id, author, color, body, sent_at
          FROM chat_messages
          ORDER BY sent_at DESC
          LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    let mut messages: Vec<ChatMessage> = rows
        .into_iter()
        .map(|r| ChatMessage {
            id: r.get::<Uuid, _>("id").to_string(),
            author: r.get("author"),
            color: r.get("color"),
            body: r.get("body"),
            sent_at: r.get("sent_at"),
        })
        .collect();
    messages.reverse();
    Ok(messages)
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;
