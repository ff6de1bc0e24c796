//! Business logic, separated from the HTTP/websocket transport layer.

pub mod chat;
pub mod identity;
pub mod session;
