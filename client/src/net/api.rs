//! REST API helpers for communicating with the server.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`. Native builds
//! (unit tests): stubs returning `None`/error, since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth/chat
//! fetch failures degrade UI behavior without crashing the page.

#![allow(clippy::unused_async)]

use serde::Deserialize;
use wire::{ChatMessage, Viewer};

/// Backend health readout, surfaced on the admin page.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub database: String,
}

/// Fetch the currently authenticated viewer from `/api/auth/me`.
/// Returns `None` if not authenticated or outside the browser.
pub async fn fetch_current_viewer() -> Option<Viewer> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Viewer>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Open a guest session via `POST /api/auth/guest`.
pub async fn guest_sign_in(name: &str) -> Option<Viewer> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/guest")
            .json(&serde_json::json!({ "name": name }))
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Viewer>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
        None
    }
}

/// Log out the current viewer by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "csr")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Create a websocket authentication ticket via `POST /api/auth/ws-ticket`.
///
/// # Errors
///
/// Returns an error string if the ticket request fails.
pub async fn create_ws_ticket() -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/ws-ticket")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("ticket request failed: {}", resp.status()));
        }
        #[derive(serde::Deserialize)]
        struct TicketResponse {
            ticket: String,
        }
        let body: TicketResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.ticket)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch recent chat history from `/api/chat/history`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_chat_history(limit: u32) -> Result<Vec<ChatMessage>, String> {
    #[cfg(feature = "csr")]
    {
        let url = format!("/api/chat/history?limit={limit}");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("history request failed: {}", resp.status()));
        }
        resp.json::<Vec<ChatMessage>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = limit;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the backend health readout from `/api/healthz`.
///
/// Returns the parsed body for both healthy and degraded responses;
/// `None` only when the request itself fails.
pub async fn fetch_health() -> Option<HealthStatus> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/api/healthz")
            .send()
            .await
            .ok()?;
        resp.json::<HealthStatus>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
