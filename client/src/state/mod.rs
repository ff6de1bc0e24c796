//! Application state provided via Leptos contexts.

pub mod auth;
pub mod chat;
pub mod gate;
pub mod ui;
