//! Authentication endpoints.
//!
//! DESIGN
//! ======
//! Two ways in: a guest sign-in (display name only) and an identity-provider
//! token sign-in. Both end in the same place — a visitor row and an opaque
//! session token in an HTTP-only cookie. Handlers never see provider
//! internals; they call the injected [`IdentityVerifier`] seam.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use wire::Viewer;

use crate::services::session::{self, SessionVisitor};
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "atrium_session";
const SESSION_TTL_DAYS: i64 = 30;
pub const MAX_NAME_LEN: usize = 40;

/// Normalize and validate a guest display name.
#[must_use]
pub fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_NAME_LEN {
        return None;
    }
    Some(trimmed.to_owned())
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(SESSION_TTL_DAYS))
        .build()
}

/// Resolve the current visitor from the session cookie.
///
/// # Errors
///
/// Returns `401` when there is no valid session, `500` on database failure.
pub async fn current_visitor(
    state: &AppState,
    jar: &CookieJar,
) -> Result<SessionVisitor, StatusCode> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_owned())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    match session::validate_session(&state.pool, &token).await {
        Ok(Some(visitor)) => Ok(visitor),
        Ok(None) => Err(StatusCode::UNAUTHORIZED),
        Err(e) => {
            tracing::error!(error = %e, "session validation failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

// =============================================================================
// SIGN-IN
// =============================================================================

#[derive(Deserialize)]
pub struct GuestRequest {
    pub name: String,
}

/// `POST /api/auth/guest` — create a guest visitor + session.
pub async fn guest_sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<GuestRequest>,
) -> Result<(CookieJar, Json<Viewer>), (StatusCode, String)> {
    let Some(name) = normalize_name(&body.name) else {
        return Err((StatusCode::UNPROCESSABLE_ENTITY, "invalid display name".into()));
    };

    let visitor_id = session::create_guest_visitor(&state.pool, &name)
        .await
        .map_err(internal)?;
    let token = session::create_session(&state.pool, visitor_id)
        .await
        .map_err(internal)?;
    let visitor = session::validate_session(&state.pool, &token)
        .await
        .map_err(internal)?
        .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "session vanished".into()))?;

    tracing::info!(%visitor_id, "guest signed in");
    Ok((jar.add(session_cookie(token)), Json(visitor.to_viewer())))
}

#[derive(Deserialize)]
pub struct TokenRequest {
    pub id_token: String,
}

/// `POST /api/auth/token` — verify an identity-provider token and open a
/// session for the backing visitor.
pub async fn token_sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<TokenRequest>,
) -> Result<(CookieJar, Json<Viewer>), (StatusCode, String)> {
    let Some(identity) = state.identity.clone() else {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "identity provider not configured".into(),
        ));
    };

    let profile = identity.verify(&body.id_token).await.map_err(|e| {
        tracing::warn!(error = %e, "token sign-in rejected");
        (StatusCode::UNAUTHORIZED, "token verification failed".to_owned())
    })?;

    let visitor_id = session::upsert_identity_visitor(&state.pool, &profile)
        .await
        .map_err(internal)?;
    let token = session::create_session(&state.pool, visitor_id)
        .await
        .map_err(internal)?;
    let visitor = session::validate_session(&state.pool, &token)
        .await
        .map_err(internal)?
        .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "session vanished".into()))?;

    tracing::info!(%visitor_id, uid = %profile.uid, "identity sign-in");
    Ok((jar.add(session_cookie(token)), Json(visitor.to_viewer())))
}

// =============================================================================
// SESSION INTROSPECTION
// =============================================================================

/// `GET /api/auth/me` — the signed-in viewer, or 401.
pub async fn me(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<Viewer>, StatusCode> {
    let visitor = current_visitor(&state, &jar).await?;
    Ok(Json(visitor.to_viewer()))
}

/// `POST /api/auth/logout` — drop the session and clear the cookie.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<CookieJar, StatusCode> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        let token = cookie.value().to_owned();
        if let Err(e) = session::delete_session(&state.pool, &token).await {
            tracing::error!(error = %e, "logout failed");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
    Ok(jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build()))
}

/// `POST /api/auth/ws-ticket` — mint a one-time websocket ticket.
pub async fn ws_ticket(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let visitor = current_visitor(&state, &jar).await?;
    let ticket = session::create_ws_ticket(&state.pool, visitor.id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "ws ticket creation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    Ok(Json(serde_json::json!({ "ticket": ticket })))
}

fn internal(e: sqlx::Error) -> (StatusCode, String) {
    tracing::error!(error = %e, "auth database failure");
    (StatusCode::INTERNAL_SERVER_ERROR, "database failure".into())
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;
