use super::*;

// =============================================================
// Constructors
// =============================================================

#[test]
fn request_has_request_status_and_fresh_id() {
    let a = Envelope::request("chat:message", serde_json::json!({"body": "hi"}));
    let b = Envelope::request("chat:message", serde_json::json!({"body": "hi"}));
    assert_eq!(a.status, Status::Request);
    assert_ne!(a.id, b.id);
    assert!(a.parent_id.is_none());
}

#[test]
fn done_carries_payload() {
    let env = Envelope::done("chat:presence", serde_json::json!({"viewers": 3}));
    assert_eq!(env.status, Status::Done);
    assert_eq!(env.data["viewers"], 3);
}

#[test]
fn replying_to_sets_parent_id() {
    let req = Envelope::request("chat:message", serde_json::json!({}));
    let reply = Envelope::done("chat:message", serde_json::json!({})).replying_to(&req.id);
    assert_eq!(reply.parent_id.as_deref(), Some(req.id.as_str()));
}

#[test]
fn at_stamps_timestamp() {
    let env = Envelope::done("chat:message", serde_json::json!({})).at(1_700_000_000_000);
    assert_eq!(env.ts, 1_700_000_000_000);
}

// =============================================================
// Codec
// =============================================================

#[test]
fn encode_decode_round_trip() {
    let env = Envelope::request("chat:message", serde_json::json!({"body": "hello"}));
    let text = env.encode().expect("encode");
    let back = Envelope::decode(&text).expect("decode");
    assert_eq!(back.id, env.id);
    assert_eq!(back.event, "chat:message");
    assert_eq!(back.status, Status::Request);
    assert_eq!(back.data["body"], "hello");
}

#[test]
fn decode_rejects_invalid_json() {
    assert!(matches!(Envelope::decode("not json"), Err(EnvelopeError::Decode(_))));
}

#[test]
fn decode_rejects_empty_event() {
    let text = r#"{"id":"e-1","event":"","status":"request","data":{}}"#;
    assert!(matches!(Envelope::decode(text), Err(EnvelopeError::EmptyEvent)));
}

#[test]
fn decode_defaults_optional_fields() {
    let text = r#"{"id":"e-1","event":"chat:message","status":"done"}"#;
    let env = Envelope::decode(text).expect("decode");
    assert!(env.parent_id.is_none());
    assert_eq!(env.ts, 0);
    assert!(env.data.is_null());
}

#[test]
fn status_serializes_lowercase() {
    let env = Envelope::error("chat:message", "nope");
    let text = env.encode().expect("encode");
    assert!(text.contains(r#""status":"error""#));
}

// =============================================================
// error_message
// =============================================================

#[test]
fn error_message_prefers_message_then_error() {
    let mut env = Envelope::error("chat:message", "fallback");
    env.data = serde_json::json!({"message": "m1", "error": "m2"});
    assert_eq!(env.error_message(), Some("m1"));

    env.data = serde_json::json!({"error": "m2"});
    assert_eq!(env.error_message(), Some("m2"));
}

#[test]
fn error_message_none_for_done_status() {
    let env = Envelope::done("chat:message", serde_json::json!({"error": "ignored"}));
    assert_eq!(env.error_message(), None);
}
