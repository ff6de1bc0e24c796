//! Shared wire model for the portfolio chat transport.
//!
//! This crate owns the JSON envelope exchanged over the chat websocket and
//! the DTOs shared between `server` and `client`. Payloads stay flexible
//! (`serde_json::Value`) so the event set can grow without a wire break.

mod chat;
mod envelope;

pub use chat::{ChatMessage, Viewer};
pub use envelope::{Envelope, EnvelopeError, Status};
