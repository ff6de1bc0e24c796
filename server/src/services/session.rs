//! Session, ticket, and visitor management.
//!
//! ARCHITECTURE
//! ============
//! HTTP auth uses long-lived session tokens, while websocket upgrades use
//! one-time short-lived tickets to avoid sending cookies over WS query params.
//!
//! TRADE-OFFS
//! ==========
//! Ticket consumption is destructive (`DELETE ... RETURNING`) to guarantee
//! single use; this favors replay safety over reconnect convenience.

use std::fmt::Write;

use rand::Rng;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use wire::Viewer;

use crate::services::identity::IdentityProfile;

/// Presence palette for newly registered visitors.
const VISITOR_COLORS: [&str; 8] = [
    "#e07a5f", "#3d405b", "#81b29a", "#f2cc8f", "#6d597a", "#b56576", "#5f797b", "#936639",
];

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex session token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Generate a short-lived 16-byte hex WS ticket.
#[must_use]
pub(crate) fn generate_ws_ticket() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Pick a presence color for a new visitor.
pub(crate) fn pick_color() -> String {
    let idx = rand::rng().random_range(0..VISITOR_COLORS.len());
    VISITOR_COLORS[idx].to_owned()
}

/// Visitor row returned from session validation.
#[derive(Debug, Clone)]
pub struct SessionVisitor {
    pub id: Uuid,
    pub name: String,
    /// Assigned presence color (hex).
    pub color: String,
    /// `true` when no identity provider account backs this visitor.
    pub guest: bool,
}

impl SessionVisitor {
    /// Project into the wire-level viewer DTO.
    #[must_use]
    pub fn to_viewer(&self) -> Viewer {
        Viewer {
            id: self.id.to_string(),
            name: self.name.clone(),
            color: self.color.clone(),
            guest: self.guest,
        }
    }
}

// =============================================================================
// VISITORS
// =============================================================================

/// Register (or refresh) a guest visitor by display name.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub async fn create_guest_visitor(pool: &PgPool, name: &str) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO visitors (id, name, color) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(name)
        .bind(pick_color())
        .execute(pool)
        .await?;
    Ok(id)
}

/// Upsert a visitor backed by an identity provider profile, keyed by the
/// provider uid. Name/email/avatar refresh on every sign-in.
///
/// # Errors
///
/// Returns an error if the upsert fails.
pub async fn upsert_identity_visitor(
    pool: &PgPool,
    profile: &IdentityProfile,
) -> Result<Uuid, sqlx::Error> {
    let fallback_name = profile
        .email
        .as_deref()
        .and_then(|e| e.split('@').next())
        .unwrap_or("Visitor");
    let name = profile.name.as_deref().unwrap_or(fallback_name);

    let row = sqlx::query(
        r"INSERT INTO visitors (id, name, email, avatar_url, color, identity_uid)
          VALUES ($1, $2, $3, $4, $5, $6)
          ON CONFLICT (identity_uid) DO UPDATE
              SET name = EXCLUDED.name,
                  email = EXCLUDED.email,
                  avatar_url = EXCLUDED.avatar_url
          RETURNING id",
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(profile.email.as_deref())
    .bind(profile.avatar_url.as_deref())
    .bind(pick_color())
    .bind(&profile.uid)
    .fetch_one(pool)
    .await?;

    Ok(row.get("id"))
}

/// Load a visitor by id (used after ticket consumption on WS upgrade).
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn visitor_by_id(
    pool: &PgPool,
    visitor_id: Uuid,
) -> Result<Option<SessionVisitor>, sqlx::Error> {
    let row = sqlx::query(
        "SELECT id, name, color, identity_uid IS NULL AS guest FROM visitors WHERE id = $1",
    )
    .bind(visitor_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| SessionVisitor {
        id: r.get("id"),
        name: r.get("name"),
        color: r.get("color"),
        guest: r.get("guest"),
    }))
}

// =============================================================================
// SESSIONS
// =============================================================================

/// Create a session for the given visitor, returning the token.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub async fn create_session(pool: &PgPool, visitor_id: Uuid) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query("INSERT INTO sessions (token, visitor_id) VALUES ($1, $2)")
        .bind(&token)
        .bind(visitor_id)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate a session token and return the associated visitor.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn validate_session(
    pool: &PgPool,
    token: &str,
) -> Result<Option<SessionVisitor>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT v.id, v.name, v.color, v.identity_uid IS NULL AS guest
          FROM sessions s
          JOIN visitors v ON v.id = s.visitor_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| SessionVisitor {
        id: r.get("id"),
        name: r.get("name"),
        color: r.get("color"),
        guest: r.get("guest"),
    }))
}

/// Delete a session by token.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

// =============================================================================
// WS TICKETS
// =============================================================================

/// Create a short-lived WS ticket for the given visitor.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub async fn create_ws_ticket(pool: &PgPool, visitor_id: Uuid) -> Result<String, sqlx::Error> {
    let ticket = generate_ws_ticket();
    sqlx::query("INSERT INTO ws_tickets (ticket, visitor_id) VALUES ($1, $2)")
        .bind(&ticket)
        .bind(visitor_id)
        .execute(pool)
        .await?;
    Ok(ticket)
}

/// Consume a WS ticket atomically, returning the `visitor_id` if valid.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn consume_ws_ticket(pool: &PgPool, ticket: &str) -> Result<Option<Uuid>, sqlx::Error> {
    let row =
        sqlx::query("DELETE FROM ws_tickets WHERE ticket = $1 AND expires_at > now() RETURNING visitor_id")
            .bind(ticket)
            .fetch_optional(pool)
            .await?;

    Ok(row.map(|r| r.get("visitor_id")))
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
