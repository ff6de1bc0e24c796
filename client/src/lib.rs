//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate contains pages, presentational components, application state,
//! the REST/websocket clients, and the deferred-loading gates that keep the
//! chat stack out of the initial render path. The site is client-rendered;
//! the backend only serves the built bundle and the API.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: mount the application into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
