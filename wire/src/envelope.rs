//! JSON envelope carried on the chat websocket.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Error returned by [`Envelope::decode`].
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    /// The raw text could not be parsed as an envelope.
    #[error("failed to decode envelope: {0}")]
    Decode(#[from] serde_json::Error),
    /// The `event` field is empty.
    #[error("envelope has an empty event name")]
    EmptyEvent,
}

/// Lifecycle status of an envelope in a request/response exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Initial request sent by the client.
    Request,
    /// Successful terminal response or server-initiated broadcast.
    Done,
    /// Error terminal response.
    Error,
}

/// One websocket message: an event name, a status, and a JSON payload.
///
/// Event names are namespaced strings (`"chat:message"`, `"chat:presence"`,
/// `"session:connected"`). Responses carry the request id in `parent_id`
/// for correlation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Milliseconds since the epoch, stamped by the server on delivery.
    #[serde(default)]
    pub ts: i64,
    pub event: String,
    pub status: Status,
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    /// Build a request envelope with a fresh id.
    #[must_use]
    pub fn request(event: &str, data: Value) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            parent_id: None,
            ts: 0,
            event: event.to_owned(),
            status: Status::Request,
            data,
        }
    }

    /// Build a successful response or broadcast for `event`.
    #[must_use]
    pub fn done(event: &str, data: Value) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            parent_id: None,
            ts: 0,
            event: event.to_owned(),
            status: Status::Done,
            data,
        }
    }

    /// Build an error response carrying a human-readable message.
    #[must_use]
    pub fn error(event: &str, message: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            parent_id: None,
            ts: 0,
            event: event.to_owned(),
            status: Status::Error,
            data: serde_json::json!({ "error": message }),
        }
    }

    /// Set `parent_id`, correlating this envelope with a request.
    #[must_use]
    pub fn replying_to(mut self, request_id: &str) -> Self {
        self.parent_id = Some(request_id.to_owned());
        self
    }

    /// Stamp the delivery timestamp (milliseconds since the epoch).
    #[must_use]
    pub fn at(mut self, ts: i64) -> Self {
        self.ts = ts;
        self
    }

    /// Serialize to the wire text form.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized, which cannot
    /// happen for envelopes built through the constructors here.
    pub fn encode(&self) -> Result<String, EnvelopeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse an envelope from wire text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid envelope or the event
    /// name is empty.
    pub fn decode(text: &str) -> Result<Self, EnvelopeError> {
        let envelope: Self = serde_json::from_str(text)?;
        if envelope.event.is_empty() {
            return Err(EnvelopeError::EmptyEvent);
        }
        Ok(envelope)
    }

    /// Extract the error message from an error envelope, if present.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        if self.status != Status::Error {
            return None;
        }
        self.data
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| self.data.get("error").and_then(Value::as_str))
    }
}

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;
