//! REST and websocket clients for the backend API.

pub mod api;
pub mod socket_client;
