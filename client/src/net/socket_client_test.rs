use super::*;

use leptos::prelude::GetUntracked;

fn message_payload(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "author": "Ada",
        "color": "#e07a5f",
        "body": "hello",
        "sent_at": 1_700_000_000_000_i64
    })
}

// =============================================================
// ChatSender
// =============================================================

#[test]
fn default_sender_is_disconnected_and_drops_sends() {
    let sender = ChatSender::default();
    assert!(!sender.is_connected());
    let env = Envelope::request("chat:message", serde_json::json!({"body": "hi"}));
    assert!(!sender.send(&env));
}

#[test]
fn connected_sender_forwards_encoded_envelopes() {
    let (tx, mut rx) = futures::channel::mpsc::unbounded::<String>();
    let sender = ChatSender::connected(tx);
    assert!(sender.is_connected());

    let env = Envelope::request("chat:message", serde_json::json!({"body": "hi"}));
    assert!(sender.send(&env));

    let json = rx.try_next().expect("channel").expect("message");
    let decoded = Envelope::decode(&json).expect("decode");
    assert_eq!(decoded.event, "chat:message");
    assert_eq!(decoded.data["body"], "hi");
}

#[test]
fn sender_reports_failure_after_receiver_drops() {
    let (tx, rx) = futures::channel::mpsc::unbounded::<String>();
    drop(rx);
    let sender = ChatSender::connected(tx);
    assert!(!sender.is_connected());
    let env = Envelope::request("chat:message", serde_json::json!({"body": "hi"}));
    assert!(!sender.send(&env));
}

// =============================================================
// parse_chat_message
// =============================================================

#[test]
fn parse_chat_message_reads_full_payload() {
    let message = parse_chat_message(&message_payload("m-1")).expect("message");
    assert_eq!(message.id, "m-1");
    assert_eq!(message.author, "Ada");
    assert_eq!(message.body, "hello");
}

#[test]
fn parse_chat_message_rejects_incomplete_payload() {
    assert!(parse_chat_message(&serde_json::json!({"id": "m-1"})).is_none());
}

// =============================================================
// dispatch_envelope
// =============================================================

#[test]
fn session_connected_marks_connection_and_viewers() {
    let chat = RwSignal::new(ChatState::default());
    let env = Envelope::done("session:connected", serde_json::json!({"viewers": 4}));
    dispatch_envelope(&env, chat);

    let state = chat.get_untracked();
    assert_eq!(state.connection, ConnectionStatus::Connected);
    assert_eq!(state.viewers, 4);
}

#[test]
fn done_chat_message_is_pushed_once() {
    let chat = RwSignal::new(ChatState::default());
    let env = Envelope::done("chat:message", message_payload("m-1"));
    dispatch_envelope(&env, chat);
    dispatch_envelope(&env, chat);

    assert_eq!(chat.get_untracked().messages.len(), 1);
}

#[test]
fn request_status_chat_message_is_ignored() {
    let chat = RwSignal::new(ChatState::default());
    let env = Envelope::request("chat:message", message_payload("m-1"));
    dispatch_envelope(&env, chat);

    assert!(chat.get_untracked().messages.is_empty());
}

#[test]
fn presence_updates_viewer_count() {
    let chat = RwSignal::new(ChatState::default());
    let env = Envelope::done("chat:presence", serde_json::json!({"viewers": 2}));
    dispatch_envelope(&env, chat);

    assert_eq!(chat.get_untracked().viewers, 2);
}

#[test]
fn unknown_events_leave_state_untouched() {
    let chat = RwSignal::new(ChatState::default());
    let env = Envelope::done("gallery:ping", serde_json::json!({}));
    dispatch_envelope(&env, chat);

    let state = chat.get_untracked();
    assert!(state.messages.is_empty());
    assert_eq!(state.connection, ConnectionStatus::Disconnected);
}
